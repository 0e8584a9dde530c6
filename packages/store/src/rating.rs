//! Star ratings: the five-icon display and the clickable entry widget.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarIcon {
    Full,
    Half,
    Empty,
}

/// Five icons for a rating in `[0, 5]`: `floor(r)` full stars, one half star
/// iff `r` is not a whole number, the rest empty. Out-of-range input is
/// clamped; NaN renders as no stars.
pub fn render_stars(rating: f64) -> [StarIcon; 5] {
    let rating = if rating.is_nan() { 0.0 } else { rating.clamp(0.0, 5.0) };
    let full = rating.trunc() as usize;
    let half = rating.fract() > 0.0;
    std::array::from_fn(|i| {
        if i < full {
            StarIcon::Full
        } else if i == full && half {
            StarIcon::Half
        } else {
            StarIcon::Empty
        }
    })
}

/// Selection state of a five-button star entry. Clicking star `n` highlights
/// stars `1..=n` and stores `n`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StarEntry {
    value: Option<u8>,
}

impl StarEntry {
    pub fn select(&mut self, n: u8) {
        self.value = Some(n.clamp(1, 5));
    }

    pub fn value(&self) -> Option<u8> {
        self.value
    }

    /// Whether the star at 1-based `position` is highlighted.
    pub fn is_highlighted(&self, position: u8) -> bool {
        self.value.is_some_and(|v| position <= v)
    }

    pub fn clear(&mut self) {
        self.value = None;
    }
}
