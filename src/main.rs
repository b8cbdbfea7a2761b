use clap::Parser;
use macroquad::prelude::*;
use synestia::{
    CanvasState, Camera,
    application::{Cli, Config, IniStorage, ThemeContext},
    input::{self, PointerState},
    rendering,
    ui::{self, Dropdown},
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Synestia".to_owned(),
        window_width: 1280,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(2);
        }
    };

    let theme = ThemeContext::load(IniStorage::open(&config.settings_path));
    let mut state = match CanvasState::new(&config, theme) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Failed to start: {}", e);
            std::process::exit(1);
        }
    };
    let mut camera = Camera::new();
    let mut pointer = PointerState::new();

    let mut size_dropdown = Dropdown::new(
        ui::widget_x(),
        270.0,
        ui::widget_width(),
        "Grid Size",
        ui::life_size_labels(),
    );
    if let Some(index) = state.life_size_index() {
        size_dropdown.set_selected(index);
    }

    log::info!("Canvas ready with {} tiles", state.graph.nodes().len());

    loop {
        let mouse_pos = mouse_position();

        // Update UI positions for responsiveness
        size_dropdown.set_position(ui::widget_x(), 270.0);
        let buttons = ui::create_buttons(state.theme.style().name, state.life.is_running());

        // Menu clicks must not fall through to the canvas or buttons
        let over_menu = size_dropdown.is_open() || size_dropdown.contains(mouse_pos);
        if size_dropdown.update(mouse_pos) {
            state.select_life_size(size_dropdown.selected());
        }

        if !over_menu {
            input::process_button_clicks(&mut state, &buttons, mouse_pos);
            input::handle_pointer(&mut state, &mut camera, &mut pointer, mouse_pos);
            input::handle_zoom(&mut camera, mouse_pos);
        }
        input::process_keyboard_input(&mut state, &mut camera);

        state.update(get_frame_time());

        let render_start = std::time::Instant::now();
        rendering::draw_canvas(&state, &camera);
        rendering::draw_controls(&state, &camera, &buttons, &size_dropdown, mouse_pos);
        state.last_render_time_ms = render_start.elapsed().as_secs_f32() * 1000.0;

        next_frame().await;
    }
}
