//! Hamclust core library.
//!
//! Groups fixed-width binary vectors into the maximum number of clusters
//! whose pairwise Hamming distance is at least a configured separation
//! threshold. The engine is a greedy minimum-spanning-forest construction
//! over implicit edges: for each vector it enumerates all vectors within
//! `separation - 1` bit flips and unions those present in the input, one
//! weight class at a time.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod engine;
mod error;
mod hamclust;
mod report;
mod source;
mod vector;

pub use crate::{
    builder::{DEFAULT_SEPARATION, DEFAULT_WIDTH, ExecutionStrategy, HamclustBuilder},
    error::{
        HamclustError, HamclustErrorCode, Result, VectorSourceError, VectorSourceErrorCode,
    },
    hamclust::Hamclust,
    report::ClusterReport,
    source::VectorSource,
    vector::{BitVector, BitVectorParseError},
};
