/// One active word falling through the playfield.
#[derive(Debug, Clone, PartialEq)]
pub struct FallingWord {
    /// Creation number within the session; lower ids were spawned earlier.
    pub id: u64,
    pub text: String,
    pub x: f32,
    pub y: f32,
    /// Rows per frame.
    pub speed: f32,
    pub width: f32,
    pub height: f32,
}

impl FallingWord {
    pub fn advance(&mut self) {
        self.y += self.speed;
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn has_reached(&self, floor: f32) -> bool {
        self.bottom() >= floor
    }
}
