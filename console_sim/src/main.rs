use std::io;
use std::io::Stdout;
use std::thread::sleep;
use std::time::Duration;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use log::LevelFilter;
use tui::backend::CrosstermBackend;
use tui::layout::{Alignment, Constraint, Direction as LayoutDirection, Layout};
use tui::style::{Color, Modifier, Style};
use tui::text::{Span, Spans};
use tui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};
use tui::Terminal;

use lanc_control::bsp::line::Line;
use lanc_control::bsp::pin::Pin;
use lanc_control::hal::{PolarityInput, PolarityOutput, PullUpButton};
use lanc_control::joystick::{ButtonJoystick, ButtonSet, Direction, Joystick};
use lanc_control::pinout::{validate, Polarity, Role, PINOUT};

use crate::keyboard_pin::KeyboardPin;
use crate::wire::Wire;

mod keyboard_pin;
mod sim_logger;
mod wire;

const POLL_PERIOD: u64 = 20;

/// What the board looks like at one poll
struct Snapshot {
    pressed: ButtonSet,
    lanc_out_active: bool,
    lanc_in_active: bool,
    wire_high: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    sim_logger::init(LevelFilter::Debug)?;
    validate(&PINOUT).map_err(|error| error.to_string())?;

    let keys = keys();
    let esc = PullUpButton::new(keys.esc);
    let lanc_toggle = PullUpButton::new(keys.lanc);
    let joystick = ButtonJoystick::new(
        PullUpButton::new(keys.rec),
        PullUpButton::new(keys.zoom_out),
        PullUpButton::new(keys.zoom_in),
        PullUpButton::new(keys.focus_near),
        PullUpButton::new(keys.focus_far),
    );

    let wire = Wire::create();
    let lanc_out = PolarityOutput::for_role(Role::LancOut, wire.driver());
    let lanc_in = PolarityInput::for_role(Role::LancIn, wire.pin());

    let _raw_mode = RawMode::enable()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut last_direction: Option<Direction> = None;
    let mut toggle_was_down = false;

    loop {
        if esc.is_down() {
            break;
        }

        let toggle_down = lanc_toggle.is_down();
        if toggle_down && !toggle_was_down {
            lanc_out.set_active(!lanc_out.is_active());
            log::info!(
                "{} {}",
                Role::LancOut,
                if lanc_out.is_active() { "active" } else { "idle" }
            );
        }
        toggle_was_down = toggle_down;

        let direction = joystick.read();
        if direction != last_direction {
            match direction {
                Some(direction) => log::info!(
                    "joystick {:?}: {}",
                    direction,
                    Role::from_direction(direction)
                ),
                None => log::debug!("joystick released"),
            }
            last_direction = direction;
        }

        let snapshot = Snapshot {
            pressed: joystick.pressed(),
            lanc_out_active: lanc_out.is_active(),
            lanc_in_active: lanc_in.is_active(),
            wire_high: wire.is_high(),
        };
        draw_tui(&mut terminal, &snapshot)?;

        sleep(Duration::from_millis(POLL_PERIOD));
    }

    terminal.clear()?;

    Ok(())
}

/// Keeps the terminal in raw mode until dropped, also on the error path
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<RawMode> {
        enable_raw_mode()?;
        Ok(RawMode)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(error) = disable_raw_mode() {
            log::warn!("cannot leave raw mode: {}", error);
        }
    }
}

fn draw_tui(terminal: &mut Terminal<CrosstermBackend<Stdout>>, snapshot: &Snapshot) -> io::Result<()> {
    terminal.draw(|rect| {
        let size = rect.size();
        let vertical_layout = Layout::default()
            .direction(LayoutDirection::Vertical)
            .margin(2)
            .constraints(
                [
                    Constraint::Length(PINOUT.len() as u16 + 3),
                    Constraint::Length(3),
                    Constraint::Min(3),
                ]
                .as_ref(),
            )
            .split(size);

        let rows = IntoIterator::into_iter(PINOUT).map(|assignment| {
            let active = is_active(snapshot, assignment.role);
            let level = assignment.polarity.level(active);
            let style = if active {
                Style::default().bg(Color::Rgb(253, 244, 220)).fg(Color::Black)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(assignment.pin.to_string()),
                Cell::from(assignment.role.name()),
                Cell::from(match assignment.polarity {
                    Polarity::Normal => "",
                    Polarity::Inverted => "inverted",
                }),
                Cell::from(direction_label(assignment.role)),
                Cell::from(if level { "HIGH" } else { "low" }),
            ])
            .style(style)
        });

        let widths = [
            Constraint::Length(4),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(6),
        ];
        let pinout_table = Table::new(rows)
            .header(
                Row::new(vec!["pin", "role", "polarity", "stick", "level"])
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            )
            .block(
                Block::default()
                    .title("pinout")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            )
            .widths(&widths);

        let wire_paragraph = Paragraph::new(Spans::from(vec![
            Span::raw("lanc wire: "),
            Span::styled(
                if snapshot.wire_high { "HIGH" } else { "low" },
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("   [space] toggles lanc out, [esc] quits"),
        ]))
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Plain));

        let log_lines: Vec<Spans> = sim_logger::lines()
            .into_iter()
            .map(|line| Spans::from(Span::raw(line)))
            .collect();
        let log_paragraph = Paragraph::new(log_lines)
            .alignment(Alignment::Left)
            .block(Block::default().title("log").borders(Borders::ALL));

        rect.render_widget(pinout_table, vertical_layout[0]);
        rect.render_widget(wire_paragraph, vertical_layout[1]);
        rect.render_widget(log_paragraph, vertical_layout[2]);
    })?;
    Ok(())
}

fn is_active(snapshot: &Snapshot, role: Role) -> bool {
    match role {
        Role::LancOut => snapshot.lanc_out_active,
        Role::LancIn => snapshot.lanc_in_active,
        button => snapshot.pressed.contains(button),
    }
}

fn direction_label(role: Role) -> &'static str {
    match role.direction() {
        Some(Direction::Center) => "center",
        Some(Direction::Up) => "up",
        Some(Direction::Down) => "down",
        Some(Direction::Left) => "left",
        Some(Direction::Right) => "right",
        None => "",
    }
}

struct Keys {
    esc: KeyboardPin,
    lanc: KeyboardPin,
    rec: KeyboardPin,
    zoom_out: KeyboardPin,
    zoom_in: KeyboardPin,
    focus_near: KeyboardPin,
    focus_far: KeyboardPin,
}

/// Arrows steer the joystick, enter is the center button
#[cfg(target_os = "linux")]
fn keys() -> Keys {
    return Keys {
        esc: KeyboardPin::create(1),
        lanc: KeyboardPin::create(57),
        rec: KeyboardPin::create(28),
        zoom_out: KeyboardPin::create(108),
        zoom_in: KeyboardPin::create(103),
        focus_near: KeyboardPin::create(106),
        focus_far: KeyboardPin::create(105),
    };
}

#[cfg(target_os = "windows")]
fn keys() -> Keys {
    return Keys {
        esc: KeyboardPin::create(27),
        lanc: KeyboardPin::create(32),
        rec: KeyboardPin::create(13),
        zoom_out: KeyboardPin::create(40),
        zoom_in: KeyboardPin::create(38),
        focus_near: KeyboardPin::create(39),
        focus_far: KeyboardPin::create(37),
    };
}
