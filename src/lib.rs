//! # ssrview - (ACGT)n microsatellite scanner
//!
//! Scans a DNA sequence for tandem repeats of the motif `ACGT` occurring at
//! least three times in a row, reports where they are, and shows them as a
//! horizontal bar chart in the terminal.
//!
//! ## Architecture
//!
//! The program is a linear pipeline, each stage in its own module:
//! - `loader`: reading a text file into a flat sequence
//! - `scanner`: finding maximal (ACGT)n runs
//! - `report`: aggregating runs and printing the text report
//! - `chart`: bar data and the `ChartRenderer` capability
//! - `model`: shared data structures
//! - `event`, `ui`, `controller`: the interactive chart viewer
//! - `pipeline`: wiring the stages together
//! - `logging`: diagnostic logging setup

pub mod chart;
pub mod controller;
pub mod event;
pub mod loader;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod scanner;
pub mod ui;
