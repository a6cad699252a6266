pub mod trim;

pub use trim::{
    GuillotineTrimmer, HistogramTrimmer, TrimConfig, TrimEngine, TrimEngineKind, TrimError,
    Trimmer,
};
