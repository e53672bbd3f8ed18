/// Preset animation styles offered by the WAN API. A template replaces the
/// free-text prompt entirely; `None` means the prompt is used instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectTemplate {
    None,
    // general
    Squish,
    Rotation,
    Poke,
    Inflate,
    Dissolve,
    // single person
    Carousel,
    SingleHeart,
    Dance1,
    Dance2,
    Dance3,
    Mermaid,
    Graduation,
    Dragon,
    Money,
    // single person or animal
    Flying,
    Rose,
    CrystalRose,
    // two people
    Hug,
    FrenchKiss,
    CoupleHeart,
}

impl EffectTemplate {
    pub const ALL: [EffectTemplate; 21] = [
        Self::None,
        Self::Squish,
        Self::Rotation,
        Self::Poke,
        Self::Inflate,
        Self::Dissolve,
        Self::Carousel,
        Self::SingleHeart,
        Self::Dance1,
        Self::Dance2,
        Self::Dance3,
        Self::Mermaid,
        Self::Graduation,
        Self::Dragon,
        Self::Money,
        Self::Flying,
        Self::Rose,
        Self::CrystalRose,
        Self::Hug,
        Self::FrenchKiss,
        Self::CoupleHeart,
    ];

    /// Code expected by the remote API. `None` carries no code.
    pub fn code(&self) -> Option<&'static str> {
        match *self {
            Self::None => None,
            Self::Squish => Some("squish"),
            Self::Rotation => Some("rotation"),
            Self::Poke => Some("poke"),
            Self::Inflate => Some("inflate"),
            Self::Dissolve => Some("dissolve"),
            Self::Carousel => Some("carousel"),
            Self::SingleHeart => Some("singleheart"),
            Self::Dance1 => Some("dance1"),
            Self::Dance2 => Some("dance2"),
            Self::Dance3 => Some("dance3"),
            Self::Mermaid => Some("mermaid"),
            Self::Graduation => Some("graduation"),
            Self::Dragon => Some("dragon"),
            Self::Money => Some("money"),
            Self::Flying => Some("flying"),
            Self::Rose => Some("rose"),
            Self::CrystalRose => Some("crystalrose"),
            Self::Hug => Some("hug"),
            Self::FrenchKiss => Some("frenchkiss"),
            Self::CoupleHeart => Some("coupleheart"),
        }
    }

    /// Name shown in the host's dropdown, as the upstream service labels them.
    pub fn display_name(&self) -> &'static str {
        match *self {
            Self::None => "无特效",
            Self::Squish => "解压捏捏",
            Self::Rotation => "转圈圈",
            Self::Poke => "载歌乐",
            Self::Inflate => "气球膨胀",
            Self::Dissolve => "分子扩散",
            Self::Carousel => "时光木马",
            Self::SingleHeart => "爱你哟",
            Self::Dance1 => "摇摆时刻",
            Self::Dance2 => "头号甩舞",
            Self::Dance3 => "星摇时刻",
            Self::Mermaid => "人鱼光耀",
            Self::Graduation => "学术加冕",
            Self::Dragon => "巨幕追袭",
            Self::Money => "财从天降",
            Self::Flying => "魔法悬浮",
            Self::Rose => "赠人玫瑰",
            Self::CrystalRose => "闪亮玫瑰",
            Self::Hug => "爱的抱抱",
            Self::FrenchKiss => "唇齿相依",
            Self::CoupleHeart => "双倍心动",
        }
    }

    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|template| template.display_name() == name)
            .copied()
    }
}

impl Default for EffectTemplate {
    fn default() -> Self {
        Self::None
    }
}
