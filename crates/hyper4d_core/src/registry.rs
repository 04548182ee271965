//! Shape registry: string identifiers to generators with default parameters

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::generators::*;
use crate::polytope::Polytope4D;
use crate::template::ShapeTemplate;
use crate::ShapeError;

/// Every shape the registry knows, in menu order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ShapeKind {
    Tesseract,
    Hypersphere,
    ThreeSphere,
    CalabiYau,
    HopfFibration,
    CliffordTorus,
    Hyperplane,
    KleinBottle,
    Pentachoron,
    Hexadecachoron,
    Buckyball,
    Hypertorus,
    Icositetrachoron,
    Cell24Dual,
    Cell120,
    Cell600,
    Duoprism,
    PolychoronPrism,
    PolychoronAntiprism,
    E4Hyperdiamond,
    F4RootPolytope,
    E8Lattice,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 22] = [
        ShapeKind::Tesseract,
        ShapeKind::Hypersphere,
        ShapeKind::ThreeSphere,
        ShapeKind::CalabiYau,
        ShapeKind::HopfFibration,
        ShapeKind::CliffordTorus,
        ShapeKind::Hyperplane,
        ShapeKind::KleinBottle,
        ShapeKind::Pentachoron,
        ShapeKind::Hexadecachoron,
        ShapeKind::Buckyball,
        ShapeKind::Hypertorus,
        ShapeKind::Icositetrachoron,
        ShapeKind::Cell24Dual,
        ShapeKind::Cell120,
        ShapeKind::Cell600,
        ShapeKind::Duoprism,
        ShapeKind::PolychoronPrism,
        ShapeKind::PolychoronAntiprism,
        ShapeKind::E4Hyperdiamond,
        ShapeKind::F4RootPolytope,
        ShapeKind::E8Lattice,
    ];

    /// The identifier used in configuration and on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Tesseract => "tesseract",
            ShapeKind::Hypersphere => "hypersphere",
            ShapeKind::ThreeSphere => "3-sphere",
            ShapeKind::CalabiYau => "calabi-yau",
            ShapeKind::HopfFibration => "hopf-fibration",
            ShapeKind::CliffordTorus => "clifford-torus",
            ShapeKind::Hyperplane => "hyperplane",
            ShapeKind::KleinBottle => "klein-bottle",
            ShapeKind::Pentachoron => "pentachoron",
            ShapeKind::Hexadecachoron => "16-cell",
            ShapeKind::Buckyball => "buckyball4d",
            ShapeKind::Hypertorus => "hypertorus",
            ShapeKind::Icositetrachoron => "24-cell",
            ShapeKind::Cell24Dual => "24-cell-dual",
            ShapeKind::Cell120 => "120-cell",
            ShapeKind::Cell600 => "600-cell",
            ShapeKind::Duoprism => "duoprism",
            ShapeKind::PolychoronPrism => "polychoron-prism",
            ShapeKind::PolychoronAntiprism => "polychoron-antiprism",
            ShapeKind::E4Hyperdiamond => "e4-hyperdiamond",
            ShapeKind::F4RootPolytope => "f4-root-polytope",
            ShapeKind::E8Lattice => "e8-lattice",
        }
    }

    /// Template holding this shape's default parameters
    pub fn default_template(self) -> ShapeTemplate {
        match self {
            ShapeKind::Tesseract => ShapeTemplate::Tesseract(Tesseract::default()),
            ShapeKind::Hypersphere => ShapeTemplate::Hypersphere(Hypersphere::default()),
            ShapeKind::ThreeSphere => ShapeTemplate::ThreeSphere(ThreeSphere::default()),
            ShapeKind::CalabiYau => ShapeTemplate::CalabiYau(CalabiYau::default()),
            ShapeKind::HopfFibration => ShapeTemplate::HopfFibration(HopfFibration::default()),
            ShapeKind::CliffordTorus => ShapeTemplate::CliffordTorus(CliffordTorus::default()),
            ShapeKind::Hyperplane => ShapeTemplate::Hyperplane(Hyperplane::default()),
            ShapeKind::KleinBottle => ShapeTemplate::KleinBottle(KleinBottle::default()),
            ShapeKind::Pentachoron => ShapeTemplate::Pentachoron(Pentachoron::default()),
            ShapeKind::Hexadecachoron => ShapeTemplate::Hexadecachoron(Hexadecachoron::default()),
            ShapeKind::Buckyball => ShapeTemplate::Buckyball(Buckyball::default()),
            ShapeKind::Hypertorus => ShapeTemplate::Hypertorus(Hypertorus::default()),
            ShapeKind::Icositetrachoron => ShapeTemplate::Icositetrachoron(Icositetrachoron::default()),
            ShapeKind::Cell24Dual => ShapeTemplate::Cell24Dual(Cell24Dual::default()),
            ShapeKind::Cell120 => ShapeTemplate::Cell120(Cell120::default()),
            ShapeKind::Cell600 => ShapeTemplate::Cell600(Cell600::default()),
            ShapeKind::Duoprism => ShapeTemplate::Duoprism(Duoprism::default()),
            ShapeKind::PolychoronPrism => ShapeTemplate::PolychoronPrism(PolychoronPrism::default()),
            ShapeKind::PolychoronAntiprism => ShapeTemplate::PolychoronAntiprism(PolychoronAntiprism::default()),
            ShapeKind::E4Hyperdiamond => ShapeTemplate::E4Hyperdiamond(E4Hyperdiamond::default()),
            ShapeKind::F4RootPolytope => ShapeTemplate::F4RootPolytope(F4RootPolytope::default()),
            ShapeKind::E8Lattice => ShapeTemplate::E8Lattice(E8Lattice::default()),
        }
    }

    /// Generate the shape with its default parameters
    pub fn generate(self) -> Polytope4D {
        self.default_template().generate()
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ShapeKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ShapeError::UnknownShape(s.to_string()))
    }
}

impl TryFrom<String> for ShapeKind {
    type Error = ShapeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ShapeKind> for String {
    fn from(kind: ShapeKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Identifiers of every registered shape
pub fn available_shapes() -> impl Iterator<Item = &'static str> {
    ShapeKind::ALL.into_iter().map(ShapeKind::as_str)
}

/// Look up a shape by identifier and generate it with default parameters
pub fn generate_shape(name: &str) -> Result<Polytope4D, ShapeError> {
    let kind: ShapeKind = name.parse()?;
    Ok(kind.generate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identifiers_are_unique() {
        let names: HashSet<_> = available_shapes().collect();
        assert_eq!(names.len(), ShapeKind::ALL.len());
    }

    #[test]
    fn test_parse_round_trip() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.as_str().parse::<ShapeKind>(), Ok(kind));
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("  Tesseract ".parse::<ShapeKind>(), Ok(ShapeKind::Tesseract));
        assert_eq!("E8-LATTICE".parse::<ShapeKind>(), Ok(ShapeKind::E8Lattice));
    }

    #[test]
    fn test_unknown_shape() {
        let err = generate_shape("dodecaplex").unwrap_err();
        assert_eq!(err, ShapeError::UnknownShape("dodecaplex".to_string()));
    }

    #[test]
    fn test_generate_by_name() {
        let shape = generate_shape("16-cell").unwrap();
        assert_eq!(shape.vertex_count(), 8);
        assert_eq!(shape.edge_count(), 24);
    }

    #[test]
    fn test_kind_serde_as_string() {
        let serialized = ron::to_string(&ShapeKind::ThreeSphere).unwrap();
        assert_eq!(serialized, "\"3-sphere\"");
        let parsed: ShapeKind = ron::from_str("\"hopf-fibration\"").unwrap();
        assert_eq!(parsed, ShapeKind::HopfFibration);
        assert!(ron::from_str::<ShapeKind>("\"torus\"").is_err());
    }
}
