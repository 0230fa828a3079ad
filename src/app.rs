use anyhow::Result;

use crate::{
    cli::{Cli, Command, RenderArgs},
    domain::{chat_list_state::ChatListState, demo},
    infra::{self, config::AppConfig},
    ui::{listing, viewport::render_visible, viewport::Viewport},
};

pub fn run(cli: Cli) -> Result<()> {
    let config = infra::config::load(cli.config.as_deref())?;
    infra::logging::init(&config.logging)?;

    match cli.command_or_default() {
        Command::Render(args) => render(&config, &args),
    }
}

fn render(config: &AppConfig, args: &RenderArgs) -> Result<()> {
    let state = build_list_state(args);
    let viewport = Viewport {
        width: args.width.unwrap_or(config.list.width),
        height: args.height.unwrap_or(config.list.height),
    };

    let ops = render_visible(&state, viewport);
    tracing::debug!(
        rows = state.rows().len(),
        ops = ops.len(),
        width = viewport.width,
        height = viewport.height,
        "rendered visible rows"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&ops)?);
    } else {
        print!("{}", listing::format_ops(&ops));
    }

    Ok(())
}

/// Seeds the demo rows and applies the requested container state.
fn build_list_state(args: &RenderArgs) -> ChatListState {
    let mut state = ChatListState::default();
    for row in demo::demo_rows() {
        state.push(row);
    }

    state.select(args.select);
    state.set_hovered(args.hover);
    if let Some(offset) = args.scroll {
        state.scroll_to(offset);
    }

    state
}
