//! Presentation shell widgets. Panels render read-only views of the
//! negotiation session and hand user intent back to the caller; they never
//! mutate the session themselves.

pub mod state;
pub mod theme;
pub mod panels;

#[cfg(test)]
mod tests;
