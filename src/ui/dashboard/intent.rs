use crate::domain::Statistics;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DashboardIntent {
    Loaded(Statistics),
    Failed(String),
    MoveSelection(i32),
}

impl Intent for DashboardIntent {}
