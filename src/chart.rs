use std::io::Write;

use smallvec::SmallVec;

use crate::error::SortError;
use crate::types::{Price, Record, StockId};

pub const TITLE: &str = "Top N Stock Prices in Real-Time";
pub const X_LABEL: &str = "Stock ID";
pub const Y_LABEL: &str = "Stock Price";

/// Widest bar, in characters
const BAR_WIDTH: usize = 50;

/// One bar: identifier on the x axis, price as the height
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bar {
    pub id: StockId,
    pub price: Price,
}

/// Top-N results are small; keep them inline
pub type Bars = SmallVec<[Bar; 8]>;

pub fn bars(records: &[Record]) -> Bars {
    records
        .iter()
        .map(|r| Bar {
            id: r.id(),
            price: r.price(),
        })
        .collect()
}

/// Renders a top-N snapshot. Failures abort the run.
pub trait Chart {
    fn render(&mut self, bars: &[Bar]) -> Result<(), SortError>;
}

/// Horizontal text bar chart written to any sink (stdout by default)
pub struct TerminalChart<W: Write> {
    out: W,
}

impl<W: Write> TerminalChart<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Chart for TerminalChart<W> {
    fn render(&mut self, bars: &[Bar]) -> Result<(), SortError> {
        writeln!(self.out, "\n{}", TITLE)?;
        writeln!(self.out, "{:>10} | {}", X_LABEL, Y_LABEL)?;
        writeln!(self.out, "{:-<1$}", "", BAR_WIDTH + 24)?;

        let max = bars
            .iter()
            .map(|b| b.price.value())
            .fold(0.0_f64, f64::max);

        for bar in bars {
            let len = if max > 0.0 {
                ((bar.price.value().max(0.0) / max) * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            writeln!(
                self.out,
                "{:>10} | {:<width$} {:>9}",
                bar.id,
                "#".repeat(len),
                bar.price.to_string(),
                width = BAR_WIDTH
            )?;
        }

        self.out.flush()?;
        Ok(())
    }
}

/// Discards every render
pub struct NullChart;

impl Chart for NullChart {
    fn render(&mut self, _bars: &[Bar]) -> Result<(), SortError> {
        Ok(())
    }
}

/// Keeps every rendered snapshot in memory
#[derive(Default)]
pub struct RecordingChart {
    pub renders: Vec<Vec<Bar>>,
}

impl Chart for RecordingChart {
    fn render(&mut self, bars: &[Bar]) -> Result<(), SortError> {
        self.renders.push(bars.to_vec());
        Ok(())
    }
}

impl<C: Chart + ?Sized> Chart for Box<C> {
    fn render(&mut self, bars: &[Bar]) -> Result<(), SortError> {
        (**self).render(bars)
    }
}
