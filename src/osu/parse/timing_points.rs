//! Processor of `[TimingPoints]`.
//!
//! `time,beatLength,meter,sampleSet,sampleIndex,volume,uninherited,effects`, where legacy files
//! omit the fields after `beatLength`.

use crate::osu::{
    command::Section,
    error::{Result, ValidationError, ValueKind},
    model::timing::{Effects, TimingPoint, TimingPointFields},
    parse::prompt::Prompter,
};

use super::{ProcessContext, SectionProcessor, value};

const MIN_FIELDS: usize = 2;
const MAX_FIELDS: usize = 8;

#[derive(Debug, Default)]
pub(crate) struct TimingPointsProcessor {
    points: Vec<TimingPoint>,
}

impl SectionProcessor for TimingPointsProcessor {
    type Output = Vec<TimingPoint>;
    const SECTION: Section = Section::TimingPoints;

    fn on_line<P: Prompter>(&mut self, ctx: &ProcessContext<'_, P>) -> Result<()> {
        let values: Vec<&str> = ctx.line().split(',').collect();
        if !(MIN_FIELDS..=MAX_FIELDS).contains(&values.len()) {
            return Err(ctx.malformed(ValueKind::FieldCount, &values.len().to_string()));
        }
        let time = ctx.corrected(ctx.coerce(ValueKind::Integer, values[0], value::millis)?);
        let mut fields = TimingPointFields::new(time, ctx.float(values[1])?);
        if let Some(raw) = values.get(2) {
            fields.time_signature = ctx.integer(raw)?;
        }
        if let Some(raw) = values.get(3) {
            fields.sample_set = Some(ctx.enumeration(raw)?);
        }
        if let Some(raw) = values.get(4) {
            fields.sample_index = ctx.integer(raw)?;
        }
        if let Some(raw) = values.get(5) {
            fields.volume = Some(ctx.integer(raw)?);
        }
        if let Some(raw) = values.get(6) {
            fields.timing_change = ctx.flag(raw)?;
        }
        if let Some(raw) = values.get(7) {
            fields.effects = Some(Effects::from_bits(ctx.integer(raw)?));
        }
        self.points.push(TimingPoint::new(fields));
        Ok(())
    }

    fn finish(self) -> core::result::Result<Vec<TimingPoint>, ValidationError> {
        Ok(self.points)
    }
}
