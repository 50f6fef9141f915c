use std::fmt;

/// HSL color with alpha, formatted the way the canvas style setters expect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl Hsla {
    pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

pub const FADE_WHITE: Hsla = Hsla::new(0.0, 0.0, 100.0, crate::constants::FADE_ALPHA);

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({:.2}, {:.1}%, {:.1}%, {:.3})",
            self.h, self.s, self.l, self.a
        )
    }
}
