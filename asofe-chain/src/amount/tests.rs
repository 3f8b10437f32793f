//! Tests for amounts and fee rates.

mod prop;
mod vectors;
