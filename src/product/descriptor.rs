use std::fmt;
use std::ops::RangeInclusive;

use crate::foundation::error::{MockupError, MockupResult};
use crate::product::directive::parse_directive;
use crate::product::styles::{EdgeStyle, FrameStyle, PrintVersion};

/// Allowed width/height, in inches, for canvas products (single, triptych, pet portrait).
pub const CANVAS_SIZE_RANGE: RangeInclusive<f64> = 8.0..=72.0;
/// Allowed width/height, in inches, for the dedicated framed-print product.
pub const FRAMED_SIZE_RANGE: RangeInclusive<f64> = 8.0..=53.0;

/// Product family selected by the directive's code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ProductCode {
    /// `S`: single canvas panel.
    #[serde(rename = "S")]
    Single,
    /// `T`: three-panel canvas.
    #[serde(rename = "T")]
    Triptych,
    /// `FP`: framed print.
    #[serde(rename = "FP")]
    FramedPrint,
    /// `PI`: pillow.
    #[serde(rename = "PI")]
    Pillow,
    /// `SPP`: pet portrait canvas.
    #[serde(rename = "SPP")]
    PetPortrait,
}

impl ProductCode {
    /// All product codes.
    pub const ALL: [ProductCode; 5] = [
        ProductCode::Single,
        ProductCode::Triptych,
        ProductCode::FramedPrint,
        ProductCode::Pillow,
        ProductCode::PetPortrait,
    ];

    /// Directive token for this product.
    pub fn code(self) -> &'static str {
        match self {
            ProductCode::Single => "S",
            ProductCode::Triptych => "T",
            ProductCode::FramedPrint => "FP",
            ProductCode::Pillow => "PI",
            ProductCode::PetPortrait => "SPP",
        }
    }

    /// Parse a directive token.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}

/// Untyped directive: product code plus positional scene parameters.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProductDescriptor {
    /// Product family.
    pub code: ProductCode,
    /// Comma-separated scene parameters in order; empty strings mark skipped slots.
    pub tokens: Vec<String>,
}

impl ProductDescriptor {
    /// Parse `product(<code>,<params>)` (or `<code>(<params>)`).
    pub fn parse(directive: &str) -> MockupResult<Self> {
        parse_directive(directive)
    }

    /// The scene parameters re-joined with commas (the pillow scene name).
    pub fn scene_parameters(&self) -> String {
        self.tokens.join(",")
    }
}

impl fmt::Display for ProductDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "product({},{})", self.code.code(), self.scene_parameters())
    }
}

/// Requested finished size in inches.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PhysicalSize {
    /// Width in inches.
    pub width: f64,
    /// Height in inches.
    pub height: f64,
}

impl PhysicalSize {
    /// Construct a size in inches.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Fail unless both sides lie in `range`.
    pub fn validate(self, range: &RangeInclusive<f64>, product: &str) -> MockupResult<()> {
        for (name, v) in [("width", self.width), ("height", self.height)] {
            if !range.contains(&v) {
                return Err(MockupError::validation(format!(
                    "invalid product {name} ({v}) rendering {product}: expected {}..={}",
                    range.start(),
                    range.end()
                )));
            }
        }
        Ok(())
    }
}

/// Parameters shared by canvas products.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PanelSpec {
    /// Finished size.
    pub size: PhysicalSize,
    /// Wrap style.
    pub edge: EdgeStyle,
    /// Wrap depth or, for the single panel, a moulded frame.
    pub frame: FrameStyle,
    /// Whether the photo carries a baked-in border.
    pub version: PrintVersion,
}

impl PanelSpec {
    /// Default wrap edge.
    pub const DEFAULT_EDGE: EdgeStyle = EdgeStyle::WhiteBorder;
    /// Default wrap depth.
    pub const DEFAULT_FRAME: FrameStyle = FrameStyle::Wrap075;

    /// Spec with every optional field at its default.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: PhysicalSize::new(width, height),
            edge: Self::DEFAULT_EDGE,
            frame: Self::DEFAULT_FRAME,
            version: PrintVersion::Plain,
        }
    }

    /// The same panel as a framed print: the edge style becomes the matte.
    pub fn framed(&self) -> FramedSpec {
        FramedSpec {
            size: self.size,
            matte: self.edge,
            frame: self.frame,
        }
    }
}

/// Parameters of the framed-print product.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FramedSpec {
    /// Visible print size (inside the matte).
    pub size: PhysicalSize,
    /// Matte option.
    pub matte: EdgeStyle,
    /// Moulding.
    pub frame: FrameStyle,
}

impl FramedSpec {
    /// Default matte.
    pub const DEFAULT_MATTE: EdgeStyle = EdgeStyle::SmallMatte;
    /// Default moulding.
    pub const DEFAULT_FRAME: FrameStyle = FrameStyle::Black;

    /// Spec with every optional field at its default.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: PhysicalSize::new(width, height),
            matte: Self::DEFAULT_MATTE,
            frame: Self::DEFAULT_FRAME,
        }
    }
}

/// Key of a scene template: product family plus scene name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct SceneKey {
    /// Product family.
    pub product: ProductCode,
    /// Scene name.
    pub name: String,
}

impl SceneKey {
    /// Construct a key.
    pub fn new(product: ProductCode, name: impl Into<String>) -> Self {
        Self {
            product,
            name: name.into(),
        }
    }
}

impl fmt::Display for SceneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.product.code(), self.name)
    }
}

/// Typed product descriptor, one variant per renderer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Product {
    /// Single canvas panel.
    Single(PanelSpec),
    /// Three-panel canvas.
    Triptych(PanelSpec),
    /// Framed print.
    FramedPrint(FramedSpec),
    /// Pillow scene.
    Pillow(SceneKey),
    /// Pet portrait canvas.
    PetPortrait(PanelSpec),
}

const WIDTH: usize = 0;
const HEIGHT: usize = 1;
const EDGE: usize = 2;
const FRAME: usize = 3;
const VERSION: usize = 4;

impl Product {
    /// Parse a directive string straight into a typed product.
    pub fn parse(directive: &str) -> MockupResult<Self> {
        Self::from_descriptor(&ProductDescriptor::parse(directive)?)
    }

    /// Convert positional tokens into typed fields, substituting defaults.
    ///
    /// Missing or non-numeric width/height fail; unknown style tokens fall back with a warning.
    /// Range checks are left to the renderers.
    pub fn from_descriptor(desc: &ProductDescriptor) -> MockupResult<Self> {
        let fields = Fields { desc };
        let product = match desc.code {
            ProductCode::Single => Product::Single(fields.panel(true, true)?),
            ProductCode::PetPortrait => Product::PetPortrait(fields.panel(true, true)?),
            ProductCode::Triptych => {
                let mut spec = fields.panel(false, false)?;
                if spec.version == PrintVersion::BakedBorder {
                    tracing::warn!(directive = %desc, "triptych has no version 2 support, using 1");
                    spec.version = PrintVersion::Plain;
                }
                Product::Triptych(spec)
            }
            ProductCode::FramedPrint => Product::FramedPrint(fields.framed()?),
            ProductCode::Pillow => {
                Product::Pillow(SceneKey::new(ProductCode::Pillow, desc.scene_parameters()))
            }
        };
        Ok(product)
    }

    /// Product family of this descriptor.
    pub fn code(&self) -> ProductCode {
        match self {
            Product::Single(_) => ProductCode::Single,
            Product::Triptych(_) => ProductCode::Triptych,
            Product::FramedPrint(_) => ProductCode::FramedPrint,
            Product::Pillow(_) => ProductCode::Pillow,
            Product::PetPortrait(_) => ProductCode::PetPortrait,
        }
    }
}

struct Fields<'a> {
    desc: &'a ProductDescriptor,
}

impl Fields<'_> {
    fn token(&self, i: usize) -> Option<&str> {
        self.desc
            .tokens
            .get(i)
            .map(|s| s.as_str())
            .filter(|s| !s.is_empty())
    }

    fn dimension(&self, i: usize, name: &str, decimal: bool) -> MockupResult<f64> {
        let code = self.desc.code.code();
        let Some(raw) = self.token(i) else {
            return Err(MockupError::directive(format!(
                "missing {name} in scene parameters for {code}"
            )));
        };
        let parsed = if decimal {
            raw.parse::<f64>().ok().filter(|v| v.is_finite())
        } else {
            raw.parse::<u32>().ok().map(f64::from)
        };
        parsed.ok_or_else(|| {
            let kind = if decimal { "a number" } else { "an integer" };
            MockupError::directive(format!("{name} \"{raw}\" for {code} is not {kind}"))
        })
    }

    fn style<T: Copy + fmt::Debug>(
        &self,
        i: usize,
        what: &str,
        default: T,
        parse: impl Fn(&str) -> Option<T>,
    ) -> T {
        let Some(raw) = self.token(i) else {
            return default;
        };
        match parse(raw) {
            Some(v) => v,
            None => {
                tracing::warn!(
                    directive = %self.desc,
                    "invalid {what} ({raw}), falling back to {default:?}"
                );
                default
            }
        }
    }

    fn size(&self, decimal: bool) -> MockupResult<PhysicalSize> {
        Ok(PhysicalSize::new(
            self.dimension(WIDTH, "width", decimal)?,
            self.dimension(HEIGHT, "height", decimal)?,
        ))
    }

    fn warn_extra(&self, used: usize) {
        if self.desc.tokens.len() > used {
            tracing::warn!(
                directive = %self.desc,
                "ignoring {} extra scene parameter(s)",
                self.desc.tokens.len() - used
            );
        }
    }

    /// `moulded` admits the physical frames, which only a single panel can hand off.
    fn panel(&self, decimal: bool, moulded: bool) -> MockupResult<PanelSpec> {
        let size = self.size(decimal)?;
        let edge = self.style(EDGE, "edge", PanelSpec::DEFAULT_EDGE, |s| {
            EdgeStyle::from_code(s).filter(|e| e.is_canvas_edge())
        });
        let frame = self.style(FRAME, "frame", PanelSpec::DEFAULT_FRAME, |s| {
            FrameStyle::from_code(s).filter(|f| moulded || !f.is_framed())
        });
        let version = self.style(
            VERSION,
            "version",
            PrintVersion::Plain,
            PrintVersion::from_code,
        );
        self.warn_extra(VERSION + 1);
        Ok(PanelSpec {
            size,
            edge,
            frame,
            version,
        })
    }

    fn framed(&self) -> MockupResult<FramedSpec> {
        let size = self.size(false)?;
        let matte = self.style(
            EDGE,
            "matte",
            FramedSpec::DEFAULT_MATTE,
            EdgeStyle::from_code,
        );
        let frame = self.style(FRAME, "frame", FramedSpec::DEFAULT_FRAME, |s| {
            FrameStyle::from_code(s).filter(|f| f.is_framed())
        });
        if self.token(VERSION) == Some(PrintVersion::BakedBorder.code()) {
            tracing::warn!(directive = %self.desc, "framed print has no version 2 support, using 1");
        }
        self.warn_extra(VERSION + 1);
        Ok(FramedSpec { size, matte, frame })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/product/descriptor.rs"]
mod tests;
