use crate::MdpEdge;

/// Bank the safe payout or risk another flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CoinEdge {
    Stop,
    Flip,
}

impl MdpEdge for CoinEdge {}

impl std::fmt::Display for CoinEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stop => write!(f, "stop"),
            Self::Flip => write!(f, "flip"),
        }
    }
}
