use std::f64::consts::PI;

use druid::widget::{Button, Controller, CrossAxisAlignment, Flex, Label, MainAxisAlignment, Slider};
use druid::{
    theme, AppLauncher, Color, Data, Env, Event, EventCtx, Lens, LocalizedString, Widget, WidgetExt,
    WidgetId, WindowDesc,
};
use rand::Rng;

use druid_color_thesaurus::*;

use druid_knob_widget::{KnobConfig, KnobWidget, KNOB_VALUE_CHANGED, SET_KNOB_VALUE};

//////////////////////////////////////////////////////////////////////////////////////
// Constants
//////////////////////////////////////////////////////////////////////////////////////
pub const BACKGROUND: Color = black::ONYX;
pub const VOLUME_ID: WidgetId = WidgetId::reserved(1);

//////////////////////////////////////////////////////////////////////////////////////
//
// AppData
//
//////////////////////////////////////////////////////////////////////////////////////
#[derive(Clone, Data, Lens, PartialEq)]
pub struct AppData {
    pub volume: f64,
    pub gain: f64,
    pub volume_changes: usize,
    pub gain_changes: usize,
}

//////////////////////////////////////////////////////////////////////////////////////
//
// ChangeCounter
//
//////////////////////////////////////////////////////////////////////////////////////
// Counts the value changed notifications coming up from either knob.
struct ChangeCounter;

impl<W: Widget<AppData>> Controller<AppData, W> for ChangeCounter {
    fn event(&mut self, child: &mut W, ctx: &mut EventCtx, event: &Event, data: &mut AppData, env: &Env) {
        if let Event::Notification(notification) = event {
            if let Some(value) = notification.get(KNOB_VALUE_CHANGED) {
                if notification.source() == VOLUME_ID {
                    data.volume_changes += 1;
                } else {
                    data.gain_changes += 1;
                }
                log::info!("Knob value changed to {value:.3}");
                ctx.set_handled();
                return;
            }
        }
        child.event(ctx, event, data, env);
    }
}

//////////////////////////////////////////////////////////////////////////////////////
//
// Main
//
//////////////////////////////////////////////////////////////////////////////////////
fn main() {
    let main_window = WindowDesc::new(make_ui())
        .window_size((420.0, 320.0))
        .title(LocalizedString::new("Knob Control"));

    let data = AppData {
        volume: 0.5,
        gain: 0.0,
        volume_changes: 0,
        gain_changes: 0,
    };

    AppLauncher::with_window(main_window)
        .configure_env(|env, _| {
            env.set(theme::WINDOW_BACKGROUND_COLOR, gray::DAVYS_GRAY);
            env.set(theme::PRIMARY_LIGHT, blue::ARGENTINIAN_BLUE);
            env.set(theme::TEXT_COLOR, white::ALABASTER)
        })
        .log_to_console()
        .launch(data)
        .expect("launch failed");
}

fn make_ui() -> impl Widget<AppData> {
    Flex::row()
        .with_flex_child(make_volume_column(), 1.0)
        .with_flex_child(make_gain_column(), 1.0)
        .main_axis_alignment(MainAxisAlignment::SpaceAround)
        .cross_axis_alignment(CrossAxisAlignment::Center)
        .padding(10.0)
        .background(BACKGROUND)
        .controller(ChangeCounter)
}

fn make_volume_column() -> impl Widget<AppData> {
    let knob = KnobWidget::new()
        .with_line_width(4.0)
        .with_pointer_length(12.0)
        .with_id(VOLUME_ID)
        .lens(AppData::volume);

    Flex::column()
        .with_child(Label::new("Volume (continuous)"))
        .with_child(knob.fix_size(150.0, 150.0))
        .with_child(Label::new(|data: &AppData, _: &_| {
            format!("{:.2} ({} changes)", data.volume, data.volume_changes)
        }))
        .with_child(Slider::new().lens(AppData::volume))
        .with_child(Button::new("Random").on_click(|ctx, _data: &mut AppData, _env| {
            let value = rand::thread_rng().gen_range(0.0..=1.0);
            ctx.submit_command(SET_KNOB_VALUE.with(value).to(VOLUME_ID));
        }))
        .cross_axis_alignment(CrossAxisAlignment::Center)
}

fn make_gain_column() -> impl Widget<AppData> {
    let config = KnobConfig {
        minimum_value: -12.0,
        maximum_value: 12.0,
        start_angle: -5.0 * PI / 4.0,
        end_angle: PI / 4.0,
        is_continuous: false,
        line_width: 4.0,
        pointer_length: 12.0,
    };
    let knob = match KnobWidget::from_config(&config) {
        Ok(knob) => knob.with_color(yellow::YELLOW_AMBER),
        Err(err) => {
            log::warn!("Falling back to a default gain knob: {err}");
            KnobWidget::new()
        }
    };

    Flex::column()
        .with_child(Label::new("Gain (on release)"))
        .with_child(knob.lens(AppData::gain).fix_size(150.0, 150.0))
        .with_child(Label::new(|data: &AppData, _: &_| {
            format!("{:+.1} dB ({} changes)", data.gain, data.gain_changes)
        }))
        .cross_axis_alignment(CrossAxisAlignment::Center)
}
