#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoResolution {
    P480,
    P1080,
}

impl VideoResolution {
    pub fn value(&self) -> &'static str {
        match *self {
            Self::P480 => "480P",
            Self::P1080 => "1080P",
        }
    }
}

impl Default for VideoResolution {
    fn default() -> Self {
        Self::P1080
    }
}
