//! Processor of `[Events]`.
//!
//! The first comma-separated token of a line selects the kind of the event. Storyboard lines
//! are kept verbatim.

use crate::osu::{
    command::Section,
    error::{ParseError, Result, ValidationError, ValueKind},
    model::events::{Background, BreakPeriod, Events, Video},
    parse::prompt::Prompter,
};

use super::{ProcessContext, SectionProcessor, value};

/// Leading tokens of storyboard objects.
const STORYBOARD_OBJECTS: [&str; 3] = ["Sprite", "Animation", "Sample"];

#[derive(Debug, Default)]
pub(crate) struct EventsProcessor {
    events: Events,
}

impl SectionProcessor for EventsProcessor {
    type Output = Events;
    const SECTION: Section = Section::Events;

    fn on_line<P: Prompter>(&mut self, ctx: &ProcessContext<'_, P>) -> Result<()> {
        let line = ctx.line();
        if line.starts_with("//") {
            return Ok(());
        }
        let values: Vec<&str> = line.split(',').collect();
        let kind = values[0].trim();
        if line.starts_with([' ', '\t', '_']) || STORYBOARD_OBJECTS.contains(&kind) {
            self.events.storyboard.push(line.to_string());
            return Ok(());
        }
        match kind {
            "0" => {
                let background = parse_background(ctx, &values)?;
                ctx.assign("Background", &mut self.events.background, background)
            }
            "1" | "Video" => {
                let video = parse_video(ctx, &values)?;
                self.events.videos.push(video);
                Ok(())
            }
            "2" | "Break" => {
                let period = parse_break(ctx, &values)?;
                self.events.breaks.push(period);
                Ok(())
            }
            _ => Err(ParseError::UnsupportedEvent {
                line: line.to_string(),
            }),
        }
    }

    fn finish(self) -> core::result::Result<Events, ValidationError> {
        Ok(self.events)
    }
}

fn require_fields<P: Prompter>(
    ctx: &ProcessContext<'_, P>,
    values: &[&str],
    count: usize,
) -> Result<()> {
    if values.len() < count {
        return Err(ctx.malformed(ValueKind::FieldCount, &values.len().to_string()));
    }
    Ok(())
}

fn parse_filename<P: Prompter>(ctx: &ProcessContext<'_, P>, raw: &str) -> Result<String> {
    ctx.coerce(ValueKind::Filename, raw, value::filename)
        .map(str::to_string)
}

fn parse_offset<P: Prompter>(
    ctx: &ProcessContext<'_, P>,
    raw: Option<&&str>,
) -> Result<Option<i32>> {
    raw.map(|raw| ctx.integer(raw)).transpose()
}

/// `0,start,filename[,x,y]`. The start time is ignored.
fn parse_background<P: Prompter>(
    ctx: &ProcessContext<'_, P>,
    values: &[&str],
) -> Result<Background> {
    require_fields(ctx, values, 3)?;
    Ok(Background {
        filename: parse_filename(ctx, values[2])?,
        x_offset: parse_offset(ctx, values.get(3))?,
        y_offset: parse_offset(ctx, values.get(4))?,
    })
}

/// `Video,start,filename[,x,y]`. The start time is left uncorrected.
fn parse_video<P: Prompter>(ctx: &ProcessContext<'_, P>, values: &[&str]) -> Result<Video> {
    require_fields(ctx, values, 3)?;
    Ok(Video {
        start_time: ctx.integer(values[1])?,
        filename: parse_filename(ctx, values[2])?,
        x_offset: parse_offset(ctx, values.get(3))?,
        y_offset: parse_offset(ctx, values.get(4))?,
    })
}

/// `Break,start,end`.
fn parse_break<P: Prompter>(
    ctx: &ProcessContext<'_, P>,
    values: &[&str],
) -> Result<BreakPeriod> {
    require_fields(ctx, values, 3)?;
    let start_time = ctx.corrected(ctx.coerce(ValueKind::Integer, values[1], value::millis)?);
    let end_time = ctx.corrected(ctx.coerce(ValueKind::Integer, values[2], value::millis)?);
    Ok(BreakPeriod::new(start_time, end_time))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::osu::parse::prompt::AlwaysUseNewer;

    fn process(lines: &[&str], timing_offset: i32) -> Result<Events> {
        let mut processor = EventsProcessor::default();
        for line in lines {
            processor.on_line(&ProcessContext {
                section: Section::Events,
                line: *line,
                timing_offset,
                prompter: &AlwaysUseNewer,
            })?;
        }
        Ok(processor.finish()?)
    }

    #[test]
    fn test_event_kinds() {
        let events = process(
            &[
                "//Background and Video events",
                "0,0,\"bg.png\",10,-20",
                "1,500,\"movie.avi\"",
                "Break,1000,900",
                "Sample,0,0,\"hit.wav\",100",
                "\tL,0,2",
            ],
            24,
        )
        .unwrap();
        assert_eq!(
            events.background,
            Some(Background {
                filename: "bg.png".into(),
                x_offset: Some(10),
                y_offset: Some(-20),
            })
        );
        assert_eq!(events.videos[0].start_time, 500);
        assert_eq!(events.videos[0].filename, "movie.avi");
        assert_eq!(events.breaks, vec![BreakPeriod::new(1024, 1024)]);
        assert_eq!(
            events.storyboard,
            vec!["Sample,0,0,\"hit.wav\",100".to_string(), "\tL,0,2".into()]
        );
    }

    #[test]
    fn test_wide_break() {
        let events = process(&["2,-2000000000,2000000000"], 24).unwrap();
        let period = events.breaks[0];
        assert_eq!(period.start_time(), -1_999_999_976);
        assert_eq!(period.end_time(), 2_000_000_024);
        assert_eq!(period.duration(), 4_000_000_000);
    }

    #[test]
    fn test_unsupported_event() {
        assert_eq!(
            process(&["Colour,0,1,2"], 0),
            Err(ParseError::UnsupportedEvent {
                line: "Colour,0,1,2".into()
            })
        );
    }
}
