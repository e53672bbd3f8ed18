#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoModel {
    Wan22I2vPlus,
    Wanx21I2vTurbo,
}

impl VideoModel {
    pub fn value(&self) -> &'static str {
        match *self {
            Self::Wan22I2vPlus => "wan2.2-i2v-plus",
            Self::Wanx21I2vTurbo => "wanx2.1-i2v-turbo",
        }
    }
}

impl Default for VideoModel {
    fn default() -> Self {
        Self::Wan22I2vPlus
    }
}
