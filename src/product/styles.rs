use crate::foundation::core::Rgb8;

/// Depth of the moulding of every physical (colored) frame, in inches.
pub const PHYSICAL_FRAME_DEPTH: f64 = 0.75;

/// Edge treatment of a print.
///
/// Canvas products read it as the wrap style; framed prints read it as the matte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum EdgeStyle {
    /// Canvas wrap with a white border.
    #[serde(rename = "WB")]
    WhiteBorder,
    /// Canvas wrap with a black border.
    #[serde(rename = "BB")]
    BlackBorder,
    /// Canvas wrap where the photo continues around the edge.
    #[serde(rename = "PB")]
    PhotoBleed,
    /// Framed print without a matte.
    #[serde(rename = "NM")]
    NoMatte,
    /// Framed print with a 2.5" matte.
    #[serde(rename = "SM")]
    SmallMatte,
}

impl EdgeStyle {
    /// All styles, in directive-code order.
    pub const ALL: [EdgeStyle; 5] = [
        EdgeStyle::WhiteBorder,
        EdgeStyle::BlackBorder,
        EdgeStyle::PhotoBleed,
        EdgeStyle::NoMatte,
        EdgeStyle::SmallMatte,
    ];

    /// Directive token for this style.
    pub fn code(self) -> &'static str {
        match self {
            EdgeStyle::WhiteBorder => "WB",
            EdgeStyle::BlackBorder => "BB",
            EdgeStyle::PhotoBleed => "PB",
            EdgeStyle::NoMatte => "NM",
            EdgeStyle::SmallMatte => "SM",
        }
    }

    /// Parse a directive token.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    /// `true` for the wrap styles a stretched canvas can have.
    pub fn is_canvas_edge(self) -> bool {
        matches!(
            self,
            EdgeStyle::WhiteBorder | EdgeStyle::BlackBorder | EdgeStyle::PhotoBleed
        )
    }

    /// Matte width in inches when this style borders a framed print.
    ///
    /// Plain borders become a 0.1" band; bleed and no-matte have none.
    pub fn matte_depth(self) -> f64 {
        match self {
            EdgeStyle::NoMatte | EdgeStyle::PhotoBleed => 0.0,
            EdgeStyle::SmallMatte => 2.5,
            EdgeStyle::WhiteBorder | EdgeStyle::BlackBorder => 0.1,
        }
    }
}

/// Colors of a physical frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct FramePalette {
    /// Base fill of the moulding.
    pub frame: Rgb8,
    /// Highlight blended over the top/left moulding.
    pub shine: Rgb8,
    /// Outline and mitre line color.
    pub outline: Rgb8,
}

/// Frame option: a gallery-wrap depth or a physical colored frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum FrameStyle {
    /// 0.75" gallery wrap.
    #[serde(rename = "075DW")]
    Wrap075,
    /// 1.5" gallery wrap.
    #[serde(rename = "150DW")]
    Wrap150,
    /// 2.5" gallery wrap.
    #[serde(rename = "250DW")]
    Wrap250,
    /// Black moulding.
    #[serde(rename = "BF")]
    Black,
    /// White moulding.
    #[serde(rename = "WF")]
    White,
    /// Espresso (dark brown) moulding.
    #[serde(rename = "EF")]
    Espresso,
    /// Natural wood moulding.
    #[serde(rename = "NF")]
    Natural,
}

impl FrameStyle {
    /// All styles, in directive-code order.
    pub const ALL: [FrameStyle; 7] = [
        FrameStyle::Wrap075,
        FrameStyle::Wrap150,
        FrameStyle::Wrap250,
        FrameStyle::Black,
        FrameStyle::White,
        FrameStyle::Espresso,
        FrameStyle::Natural,
    ];

    /// Directive token for this style.
    pub fn code(self) -> &'static str {
        match self {
            FrameStyle::Wrap075 => "075DW",
            FrameStyle::Wrap150 => "150DW",
            FrameStyle::Wrap250 => "250DW",
            FrameStyle::Black => "BF",
            FrameStyle::White => "WF",
            FrameStyle::Espresso => "EF",
            FrameStyle::Natural => "NF",
        }
    }

    /// Parse a directive token.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    /// Physical depth in inches.
    pub fn depth(self) -> f64 {
        match self {
            FrameStyle::Wrap075 => 0.75,
            FrameStyle::Wrap150 => 1.50,
            FrameStyle::Wrap250 => 2.50,
            FrameStyle::Black | FrameStyle::White | FrameStyle::Espresso | FrameStyle::Natural => {
                PHYSICAL_FRAME_DEPTH
            }
        }
    }

    /// `true` for moulded frames that are drawn around the print.
    pub fn is_framed(self) -> bool {
        self.palette().is_some()
    }

    /// Frame colors, `None` for gallery wraps.
    pub fn palette(self) -> Option<FramePalette> {
        let (frame, shine, outline) = match self {
            FrameStyle::Wrap075 | FrameStyle::Wrap150 | FrameStyle::Wrap250 => return None,
            FrameStyle::Black => (
                Rgb8::new(28, 28, 28),
                Rgb8::new(255, 255, 255),
                Rgb8::new(0, 0, 0),
            ),
            FrameStyle::White => (
                Rgb8::new(244, 244, 240),
                Rgb8::new(255, 255, 255),
                Rgb8::new(186, 186, 180),
            ),
            FrameStyle::Espresso => (
                Rgb8::new(60, 42, 32),
                Rgb8::new(214, 184, 150),
                Rgb8::new(28, 18, 12),
            ),
            FrameStyle::Natural => (
                Rgb8::new(198, 162, 114),
                Rgb8::new(255, 238, 204),
                Rgb8::new(128, 98, 62),
            ),
        };
        Some(FramePalette {
            frame,
            shine,
            outline,
        })
    }
}

/// Whether the source photo already contains a printed border.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum PrintVersion {
    /// Version 1: the photo has no border.
    #[default]
    #[serde(rename = "1")]
    Plain,
    /// Version 2: a frame-depth border is baked into the photo's pixels.
    #[serde(rename = "2")]
    BakedBorder,
}

impl PrintVersion {
    /// Directive token for this version.
    pub fn code(self) -> &'static str {
        match self {
            PrintVersion::Plain => "1",
            PrintVersion::BakedBorder => "2",
        }
    }

    /// Parse a directive token.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(PrintVersion::Plain),
            "2" => Some(PrintVersion::BakedBorder),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/product/styles.rs"]
mod tests;
