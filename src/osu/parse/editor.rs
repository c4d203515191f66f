//! Processor of `[Editor]`.

use crate::osu::{
    command::Section,
    error::{Result, ValidationError, ValueKind},
    model::editor::Editor,
    parse::prompt::Prompter,
};

use super::{ProcessContext, SectionProcessor, value};

#[derive(Debug, Default)]
pub(crate) struct EditorProcessor {
    bookmarks: Option<Vec<i32>>,
    distance_spacing: Option<f64>,
    beat_divisor: Option<i32>,
    grid_size: Option<i32>,
    timeline_zoom: Option<f64>,
}

impl SectionProcessor for EditorProcessor {
    type Output = Editor;
    const SECTION: Section = Section::Editor;

    fn on_line<P: Prompter>(&mut self, ctx: &ProcessContext<'_, P>) -> Result<()> {
        let (key, value) = ctx.key_value()?;
        match key {
            "Bookmarks" => {
                let bookmarks = ctx.coerce(ValueKind::IntegerList, value, value::integer_list)?;
                ctx.assign(key, &mut self.bookmarks, bookmarks)
            }
            "DistanceSpacing" => ctx.assign(key, &mut self.distance_spacing, ctx.float(value)?),
            "BeatDivisor" => ctx.assign(key, &mut self.beat_divisor, ctx.integer(value)?),
            "GridSize" => ctx.assign(key, &mut self.grid_size, ctx.integer(value)?),
            "TimelineZoom" => ctx.assign(key, &mut self.timeline_zoom, ctx.float(value)?),
            _ => Err(ctx.unsupported_field()),
        }
    }

    fn finish(self) -> core::result::Result<Editor, ValidationError> {
        let missing = |field| ValidationError::MissingField {
            section: Self::SECTION,
            field,
        };
        Ok(Editor {
            bookmarks: self.bookmarks,
            distance_spacing: self
                .distance_spacing
                .ok_or_else(|| missing("DistanceSpacing"))?,
            beat_divisor: self.beat_divisor.ok_or_else(|| missing("BeatDivisor"))?,
            grid_size: self.grid_size.ok_or_else(|| missing("GridSize"))?,
            timeline_zoom: self.timeline_zoom.ok_or_else(|| missing("TimelineZoom"))?,
        })
    }
}
