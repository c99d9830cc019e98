use tokio_util::sync::CancellationToken;

/// Lifetime of one screen instance.
///
/// Every request carries the scope of the view that issued it. Leaving the
/// view cancels the token, so in-flight work is dropped, and bumps the
/// generation, so results that raced the cancellation are ignored on arrival.
#[derive(Debug, Clone)]
pub struct ViewScope {
    generation: u64,
    token: CancellationToken,
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::root()
    }
}

impl ViewScope {
    pub fn root() -> Self {
        Self {
            generation: 0,
            token: CancellationToken::new(),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Cancel the current scope and open the next one in place.
    pub fn renew(&mut self) {
        self.token.cancel();
        self.generation += 1;
        self.token = CancellationToken::new();
    }
}
