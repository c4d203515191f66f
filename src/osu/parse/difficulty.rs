//! Processor of `[Difficulty]`.

use crate::osu::{
    command::Section,
    error::{Result, ValidationError},
    model::difficulty::Difficulty,
    parse::prompt::Prompter,
};

use super::{ProcessContext, SectionProcessor};

#[derive(Debug, Default)]
pub(crate) struct DifficultyProcessor {
    hp_drain_rate: Option<f64>,
    circle_size: Option<f64>,
    overall_difficulty: Option<f64>,
    approach_rate: Option<f64>,
    slider_multiplier: Option<f64>,
    slider_tick_rate: Option<f64>,
}

impl SectionProcessor for DifficultyProcessor {
    type Output = Difficulty;
    const SECTION: Section = Section::Difficulty;

    fn on_line<P: Prompter>(&mut self, ctx: &ProcessContext<'_, P>) -> Result<()> {
        let (key, value) = ctx.key_value()?;
        let slot = match key {
            "HPDrainRate" => &mut self.hp_drain_rate,
            "CircleSize" => &mut self.circle_size,
            "OverallDifficulty" => &mut self.overall_difficulty,
            "ApproachRate" => &mut self.approach_rate,
            "SliderMultiplier" => &mut self.slider_multiplier,
            "SliderTickRate" => &mut self.slider_tick_rate,
            _ => return Err(ctx.unsupported_field()),
        };
        ctx.assign(key, slot, ctx.float(value)?)
    }

    fn finish(self) -> core::result::Result<Difficulty, ValidationError> {
        let missing = |field| ValidationError::MissingField {
            section: Self::SECTION,
            field,
        };
        Ok(Difficulty {
            hp_drain_rate: self.hp_drain_rate.ok_or_else(|| missing("HPDrainRate"))?,
            circle_size: self.circle_size.ok_or_else(|| missing("CircleSize"))?,
            overall_difficulty: self
                .overall_difficulty
                .ok_or_else(|| missing("OverallDifficulty"))?,
            approach_rate: self.approach_rate.ok_or_else(|| missing("ApproachRate"))?,
            slider_multiplier: self
                .slider_multiplier
                .ok_or_else(|| missing("SliderMultiplier"))?,
            slider_tick_rate: self
                .slider_tick_rate
                .ok_or_else(|| missing("SliderTickRate"))?,
        })
    }
}
