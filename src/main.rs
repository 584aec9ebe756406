//! Headless card field runner.
//!
//! Builds a field of `ITEM_COUNT` placeholder records, plays the intro, then
//! replays a script of button presses and clicks on a simulated 50 Hz frame
//! clock, logging what the renderer would see.

use std::path::Path;

use cardfield::frame_loop::{FrameLoop, SteppedFrames};
use cardfield::options::Options;
use cardfield::store::{ItemDescriptor, ItemTransformStore};
use cardfield::{FieldCommand, FieldEngine};
use web_time::Duration;

const FRAME_STEP: Duration = Duration::from_millis(20);
/// Frames between scripted commands (3 s at 50 Hz).
const FRAMES_PER_COMMAND: usize = 150;

struct Args {
    items: usize,
    options: Options,
    script: Vec<FieldCommand>,
}

fn parse_command(word: &str) -> Result<FieldCommand, String> {
    if let Some(index) = word.strip_prefix("click:") {
        let index = index
            .parse::<usize>()
            .map_err(|e| format!("bad click index {index:?}: {e}"))?;
        return Ok(FieldCommand::FocusItem(ItemDescriptor::new(index)));
    }
    word.parse::<FieldCommand>().map_err(|e| e.to_string())
}

fn parse_args() -> Result<Args, String> {
    let mut args = std::env::args().skip(1);
    let items = args
        .next()
        .ok_or_else(|| {
            "Usage: cardfield <ITEM_COUNT> [--options FILE] \
             [table|sphere|helix|grid|render|click:N]..."
                .to_owned()
        })?
        .parse::<usize>()
        .map_err(|e| format!("bad item count: {e}"))?;

    let mut options = Options::default();
    let mut script = Vec::new();
    while let Some(arg) = args.next() {
        if arg == "--options" {
            let path = args
                .next()
                .ok_or_else(|| "--options needs a path".to_owned())?;
            options =
                Options::load(Path::new(&path)).map_err(|e| e.to_string())?;
        } else {
            script.push(parse_command(&arg)?);
        }
    }

    Ok(Args {
        items,
        options,
        script,
    })
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let records = vec![(); args.items];
    let mut engine = match FieldEngine::new(&records, args.options) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    engine.start();

    let total_frames = (args.script.len() + 1) * FRAMES_PER_COMMAND;
    let mut source = args.script.iter().enumerate().fold(
        SteppedFrames::new(FRAME_STEP, total_frames),
        |source, (i, &command)| {
            source.with_event((i + 1) * FRAMES_PER_COMMAND, command)
        },
    );

    let mut sink = |items: &ItemTransformStore| {
        if let Some(first) = items.get(0) {
            log::trace!(
                "render: item 0 at {} rot {}",
                first.position,
                first.orientation
            );
        }
    };
    let stats = FrameLoop::run(&mut engine, &mut source, &mut sink);

    log::info!(
        "{} frames, {} rendered, final layout {:?}, settled: {}",
        stats.frames,
        stats.renders,
        engine.layout(),
        engine.is_settled()
    );
}
