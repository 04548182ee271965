//! Serializable shape templates
//!
//! ShapeTemplate is the closed sum type over every generator. Each variant
//! wraps the generator's parameter struct, so a template can be loaded from
//! RON or TOML, tweaked, and turned into geometry without trait objects
//! crossing the serialization boundary.
//!
//! The `type` tag uses the registry identifiers (`"tesseract"`, `"3-sphere"`,
//! ...); omitted parameters take the generator defaults.

use serde::{Serialize, Deserialize};

use crate::generators::*;
use crate::polytope::{Polytope4D, ShapeGenerator};
use crate::registry::ShapeKind;

/// Serializable shape template
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShapeTemplate {
    #[serde(rename = "tesseract")]
    Tesseract(Tesseract),
    #[serde(rename = "hypersphere")]
    Hypersphere(Hypersphere),
    #[serde(rename = "3-sphere")]
    ThreeSphere(ThreeSphere),
    #[serde(rename = "calabi-yau")]
    CalabiYau(CalabiYau),
    #[serde(rename = "hopf-fibration")]
    HopfFibration(HopfFibration),
    #[serde(rename = "clifford-torus")]
    CliffordTorus(CliffordTorus),
    #[serde(rename = "hyperplane")]
    Hyperplane(Hyperplane),
    #[serde(rename = "klein-bottle")]
    KleinBottle(KleinBottle),
    #[serde(rename = "pentachoron")]
    Pentachoron(Pentachoron),
    #[serde(rename = "16-cell")]
    Hexadecachoron(Hexadecachoron),
    #[serde(rename = "buckyball4d")]
    Buckyball(Buckyball),
    #[serde(rename = "hypertorus")]
    Hypertorus(Hypertorus),
    #[serde(rename = "24-cell")]
    Icositetrachoron(Icositetrachoron),
    #[serde(rename = "24-cell-dual")]
    Cell24Dual(Cell24Dual),
    #[serde(rename = "120-cell")]
    Cell120(Cell120),
    #[serde(rename = "600-cell")]
    Cell600(Cell600),
    #[serde(rename = "duoprism")]
    Duoprism(Duoprism),
    #[serde(rename = "polychoron-prism")]
    PolychoronPrism(PolychoronPrism),
    #[serde(rename = "polychoron-antiprism")]
    PolychoronAntiprism(PolychoronAntiprism),
    #[serde(rename = "e4-hyperdiamond")]
    E4Hyperdiamond(E4Hyperdiamond),
    #[serde(rename = "f4-root-polytope")]
    F4RootPolytope(F4RootPolytope),
    #[serde(rename = "e8-lattice")]
    E8Lattice(E8Lattice),
}

impl Default for ShapeTemplate {
    fn default() -> Self {
        ShapeTemplate::Tesseract(Tesseract::default())
    }
}

impl ShapeTemplate {
    /// The generator behind this template
    pub fn generator(&self) -> &dyn ShapeGenerator {
        match self {
            ShapeTemplate::Tesseract(g) => g,
            ShapeTemplate::Hypersphere(g) => g,
            ShapeTemplate::ThreeSphere(g) => g,
            ShapeTemplate::CalabiYau(g) => g,
            ShapeTemplate::HopfFibration(g) => g,
            ShapeTemplate::CliffordTorus(g) => g,
            ShapeTemplate::Hyperplane(g) => g,
            ShapeTemplate::KleinBottle(g) => g,
            ShapeTemplate::Pentachoron(g) => g,
            ShapeTemplate::Hexadecachoron(g) => g,
            ShapeTemplate::Buckyball(g) => g,
            ShapeTemplate::Hypertorus(g) => g,
            ShapeTemplate::Icositetrachoron(g) => g,
            ShapeTemplate::Cell24Dual(g) => g,
            ShapeTemplate::Cell120(g) => g,
            ShapeTemplate::Cell600(g) => g,
            ShapeTemplate::Duoprism(g) => g,
            ShapeTemplate::PolychoronPrism(g) => g,
            ShapeTemplate::PolychoronAntiprism(g) => g,
            ShapeTemplate::E4Hyperdiamond(g) => g,
            ShapeTemplate::F4RootPolytope(g) => g,
            ShapeTemplate::E8Lattice(g) => g,
        }
    }

    /// Build the geometry described by this template
    pub fn generate(&self) -> Polytope4D {
        self.generator().generate()
    }

    /// Registry identifier of the shape
    pub fn name(&self) -> &'static str {
        self.generator().name()
    }

    /// Registry entry this template belongs to
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeTemplate::Tesseract(_) => ShapeKind::Tesseract,
            ShapeTemplate::Hypersphere(_) => ShapeKind::Hypersphere,
            ShapeTemplate::ThreeSphere(_) => ShapeKind::ThreeSphere,
            ShapeTemplate::CalabiYau(_) => ShapeKind::CalabiYau,
            ShapeTemplate::HopfFibration(_) => ShapeKind::HopfFibration,
            ShapeTemplate::CliffordTorus(_) => ShapeKind::CliffordTorus,
            ShapeTemplate::Hyperplane(_) => ShapeKind::Hyperplane,
            ShapeTemplate::KleinBottle(_) => ShapeKind::KleinBottle,
            ShapeTemplate::Pentachoron(_) => ShapeKind::Pentachoron,
            ShapeTemplate::Hexadecachoron(_) => ShapeKind::Hexadecachoron,
            ShapeTemplate::Buckyball(_) => ShapeKind::Buckyball,
            ShapeTemplate::Hypertorus(_) => ShapeKind::Hypertorus,
            ShapeTemplate::Icositetrachoron(_) => ShapeKind::Icositetrachoron,
            ShapeTemplate::Cell24Dual(_) => ShapeKind::Cell24Dual,
            ShapeTemplate::Cell120(_) => ShapeKind::Cell120,
            ShapeTemplate::Cell600(_) => ShapeKind::Cell600,
            ShapeTemplate::Duoprism(_) => ShapeKind::Duoprism,
            ShapeTemplate::PolychoronPrism(_) => ShapeKind::PolychoronPrism,
            ShapeTemplate::PolychoronAntiprism(_) => ShapeKind::PolychoronAntiprism,
            ShapeTemplate::E4Hyperdiamond(_) => ShapeKind::E4Hyperdiamond,
            ShapeTemplate::F4RootPolytope(_) => ShapeKind::F4RootPolytope,
            ShapeTemplate::E8Lattice(_) => ShapeKind::E8Lattice,
        }
    }

    /// Create a tesseract template
    pub fn tesseract(size: f32) -> Self {
        ShapeTemplate::Tesseract(Tesseract::new(size))
    }

    /// Create a duoprism template
    pub fn duoprism(m: usize, n: usize, size: f32) -> Self {
        ShapeTemplate::Duoprism(Duoprism::new(m, n, size))
    }

    /// Create a hypertorus template
    pub fn hypertorus(major_radius: f32, minor_radius: f32, major_resolution: usize, minor_resolution: usize) -> Self {
        ShapeTemplate::Hypertorus(Hypertorus::new(major_radius, minor_radius, major_resolution, minor_resolution))
    }

    /// Create a prism template over a Platonic base
    pub fn prism(base: BasePolyhedron, size: f32, height: f32) -> Self {
        ShapeTemplate::PolychoronPrism(PolychoronPrism::new(base, size, height))
    }
}

impl From<ShapeKind> for ShapeTemplate {
    fn from(kind: ShapeKind) -> Self {
        kind.default_template()
    }
}
