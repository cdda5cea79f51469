//! The two literal tables the report embeds.
//!
//! Figures are transcribed from the offline analysis and never computed here.

use super::content::{Cell, Table};

// =============================================================================
// DATA SOURCES
// =============================================================================

/// Publisher of a merged dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Publisher {
    TomTom,
    /// Miami-Dade County.
    Mdc,
    /// Florida Department of Transportation.
    Fdot,
}

impl Publisher {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TomTom => "TomTom",
            Self::Mdc => "MDC",
            Self::Fdot => "FDOT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetRow {
    pub dataset: &'static str,
    pub source: Publisher,
    pub merged_features: &'static str,
    pub records: u64,
}

pub const DATA_SOURCE_COLUMNS: [&str; 4] = ["Dataset", "Source", "Merged Features", "Number of Records"];

const DATA_SOURCES: [DatasetRow; 8] = [
    DatasetRow {
        dataset: "Incident Details",
        source: Publisher::TomTom,
        merged_features: "magnitudeOfDelay, description, startTime, geometry, from, to, length, probabilityOfOccurrence",
        records: 6666,
    },
    DatasetRow {
        dataset: "Traffic Flow",
        source: Publisher::TomTom,
        merged_features: "freeFlowSpeed, freeFlowTravelTime",
        records: 6666,
    },
    DatasetRow { dataset: "Traffic Signals", source: Publisher::Mdc, merged_features: "AssetID", records: 5 },
    DatasetRow { dataset: "Bus Routes", source: Publisher::Mdc, merged_features: "LINENAME", records: 106 },
    DatasetRow {
        dataset: "Street Maintenance",
        source: Publisher::Mdc,
        merged_features: "SPEEDLIMIT, LANES, ST_WIDTH",
        records: 114_919,
    },
    DatasetRow { dataset: "County Zoning", source: Publisher::Mdc, merged_features: "ZONE_DESC", records: 3984 },
    DatasetRow {
        dataset: "Tract 2020 (Census)",
        source: Publisher::Mdc,
        merged_features: "AREALAND, POP100",
        records: 707,
    },
    DatasetRow {
        dataset: "2023 Avg Annual Daily Traffic (AADT)",
        source: Publisher::Fdot,
        merged_features: "AADT",
        records: 100_893,
    },
];

#[must_use]
pub fn data_sources() -> &'static [DatasetRow] {
    &DATA_SOURCES
}

#[must_use]
pub fn data_sources_table() -> Table {
    Table {
        columns: DATA_SOURCE_COLUMNS.to_vec(),
        rows: DATA_SOURCES
            .iter()
            .map(|row| {
                vec![
                    Cell::Text(row.dataset),
                    Cell::Text(row.source.label()),
                    Cell::Text(row.merged_features),
                    Cell::Count(row.records),
                ]
            })
            .collect(),
    }
}

// =============================================================================
// MODEL RESULTS
// =============================================================================

/// Accuracy of one classifier across the three training stages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelScores {
    pub model: &'static str,
    pub train_baseline: f64,
    pub test_baseline: f64,
    pub train_smote: f64,
    pub test_smote: f64,
    pub train_tuning: f64,
    pub test_tuning: f64,
}

impl ModelScores {
    /// Scores in column order, after the model name.
    #[must_use]
    pub fn scores(&self) -> [f64; 6] {
        [
            self.train_baseline,
            self.test_baseline,
            self.train_smote,
            self.test_smote,
            self.train_tuning,
            self.test_tuning,
        ]
    }
}

pub const MODEL_RESULT_COLUMNS: [&str; 7] =
    ["Model", "Train Baseline", "Test Baseline", "Train SMOTE", "Test SMOTE", "Train Tuning", "Test Tuning"];

const MODEL_RESULTS: [ModelScores; 3] = [
    ModelScores {
        model: "Decision Tree",
        train_baseline: 0.997_075,
        test_baseline: 0.984_975,
        train_smote: 0.997_037,
        test_smote: 0.971_619,
        train_tuning: 0.993_534,
        test_tuning: 0.964_942,
    },
    ModelScores {
        model: "Random Forest",
        train_baseline: 0.997_075,
        test_baseline: 0.986_644,
        train_smote: 0.997_037,
        test_smote: 0.984_975,
        train_tuning: 0.996_767,
        test_tuning: 0.983_306,
    },
    ModelScores {
        model: "XGBoost",
        train_baseline: 0.997_075,
        test_baseline: 0.986_644,
        train_smote: 0.997_037,
        test_smote: 0.984_975,
        train_tuning: 0.996_767,
        test_tuning: 0.986_644,
    },
];

#[must_use]
pub fn model_results() -> &'static [ModelScores] {
    &MODEL_RESULTS
}

#[must_use]
pub fn model_results_table() -> Table {
    Table {
        columns: MODEL_RESULT_COLUMNS.to_vec(),
        rows: MODEL_RESULTS
            .iter()
            .map(|m| {
                let mut row = Vec::with_capacity(MODEL_RESULT_COLUMNS.len());
                row.push(Cell::Text(m.model));
                row.extend(m.scores().into_iter().map(Cell::Score));
                row
            })
            .collect(),
    }
}

#[cfg(test)]
#[path = "tables_test.rs"]
mod tests;
