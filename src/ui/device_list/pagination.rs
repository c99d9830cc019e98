/// Maximum number of numbered page buttons.
pub const WINDOW_SIZE: u32 = 5;

/// Numbered pages to show around `current`.
///
/// The first three pages anchor the window at page 1; past that it starts
/// two pages before `current`. Pages past `total` are dropped, so the window
/// shrinks near the end instead of sliding back.
pub fn page_window(current: u32, total: u32) -> Vec<u32> {
    let first = if current <= 3 {
        1
    } else {
        current - 2
    };
    (0..WINDOW_SIZE.min(total))
        .map(|offset| first + offset)
        .filter(|page| *page <= total)
        .collect()
}
