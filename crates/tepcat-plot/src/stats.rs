//! Summary statistics and equal-width histograms over orbital periods.

use std::io;

use serde::Serialize;

use crate::error::{PlotError, Result};

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n - 1 denominator). Needs two values.
pub fn sample_stdev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    Some((sum_sq / (values.len() - 1) as f64).sqrt())
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub stdev: Option<f64>,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    pub fn of(values: &[f64]) -> Result<Self> {
        let mean = mean(values).ok_or(PlotError::EmptyDataset)?;
        let (min, max) = bounds(values);
        Ok(Self {
            count: values.len(),
            mean,
            stdev: sample_stdev(values),
            min,
            max,
        })
    }
}

fn bounds(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

impl Bin {
    pub fn center(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub bins: Vec<Bin>,
    pub total: usize,
}

impl Histogram {
    /// Splits `[min, max]` into `bin_count` equal-width bins. Every bin is
    /// half-open except the last, which also holds `max`. A constant series
    /// gets the range `[v - 0.5, v + 0.5]`.
    pub fn build(values: &[f64], bin_count: usize) -> Result<Self> {
        if bin_count == 0 {
            return Err(PlotError::InvalidBinCount);
        }
        if values.is_empty() {
            return Err(PlotError::EmptyDataset);
        }

        let (mut lo, mut hi) = bounds(values);
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }
        let width = (hi - lo) / bin_count as f64;

        let mut bins: Vec<Bin> = (0..bin_count)
            .map(|i| Bin {
                lower: lo + width * i as f64,
                upper: if i + 1 == bin_count {
                    hi
                } else {
                    lo + width * (i + 1) as f64
                },
                count: 0,
            })
            .collect();

        for &value in values {
            let mut index = (((value - lo) / width).floor() as usize).min(bin_count - 1);
            // Rounding can put the estimate one bin off the stored edges.
            if value < bins[index].lower && index > 0 {
                index -= 1;
            } else if index + 1 < bin_count && value >= bins[index].upper {
                index += 1;
            }
            bins[index].count += 1;
        }

        Ok(Self {
            bins,
            total: values.len(),
        })
    }

    pub fn percentage(&self, bin: &Bin) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        bin.count as f64 * 100.0 / self.total as f64
    }

    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }

    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for bin in &self.bins {
            csv_writer.serialize(BinRow {
                lower: bin.lower,
                upper: bin.upper,
                count: bin.count,
                percent: self.percentage(bin),
            })?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct BinRow {
    lower: f64,
    upper: f64,
    count: usize,
    percent: f64,
}
