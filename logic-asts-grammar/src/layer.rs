//! Logic layers and their nesting.
//!
//! The layers form a small lattice: `base ⊂ ltl ⊂ strel` and `base ⊂ ltl ⊂ stl_go`, with
//! `strel` and `stl_go` incomparable. Every grammar accepts the operators of the layers it
//! includes.
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// One nested logic fragment.
///
/// Parses from (and displays as) its grammar name; the long-form aliases `propositional`,
/// `temporal`, `spatial` and `graph` are accepted as well.
///
/// ```
/// use logic_asts_grammar::Layer;
///
/// assert_eq!("temporal".parse::<Layer>().unwrap(), Layer::Ltl);
/// assert_eq!(Layer::StlGo.to_string(), "stl_go");
/// assert!(Layer::Strel.includes(Layer::Base));
/// assert!(!Layer::Strel.includes(Layer::StlGo));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
pub enum Layer {
    /// Propositional logic.
    #[strum(to_string = "base", serialize = "propositional")]
    Base,
    /// Linear temporal logic.
    #[strum(to_string = "ltl", serialize = "temporal")]
    Ltl,
    /// Spatio-temporal reach/escape logic.
    #[strum(to_string = "strel", serialize = "spatial")]
    Strel,
    /// Temporal logic with graph operators.
    #[strum(to_string = "stl_go", serialize = "graph")]
    StlGo,
}

impl Layer {
    /// The layer this one directly extends, if any.
    #[inline]
    pub fn parent(self) -> Option<Layer> {
        match self {
            Layer::Base => None,
            Layer::Ltl => Some(Layer::Base),
            Layer::Strel | Layer::StlGo => Some(Layer::Ltl),
        }
    }

    /// This layer followed by every layer it extends, nearest first.
    pub fn ancestry(self) -> impl Iterator<Item = Layer> {
        std::iter::successors(Some(self), |layer| layer.parent())
    }

    /// Whether every operator of `other` is also an operator of `self`.
    #[inline]
    pub fn includes(self, other: Layer) -> bool {
        self.ancestry().any(|layer| layer == other)
    }
}
