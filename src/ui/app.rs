//! Main UI Application
//!
//! Coordinates rendering and input handling across all screens.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::game::{
    Game, GameState, ImprovementType, MatchOutcome, MessageCategory, PlayerId, PlayingState,
    ResourceType, Session, RECENT_MESSAGES,
};
use crate::save::{delete_save, list_saves, load_game, restore_session, save_exists, save_game};
use crate::ui::camera::{Camera, PAN_STEP};
use crate::ui::map_view::{self, CELL_PX_H, CELL_PX_W};
use crate::world::{hex_to_pixel, HexCoord, WorldSize};

/// Mouse drag bookkeeping
struct DragState {
    /// Last cell the pointer passed through
    last_cell: (u16, u16),
    /// Whether the pointer moved since the button went down
    moved: bool,
}

/// Main UI application
pub struct App {
    /// Viewport camera over the world
    camera: Camera,
    /// Map viewport from the last frame, for mouse hit testing
    map_area: Rect,
    /// Pointer position in map cells, if inside the viewport
    mouse_cell: Option<(u16, u16)>,
    /// Currently selected hex
    selected: Option<HexCoord>,
    /// Left-button drag in progress
    drag: Option<DragState>,
    /// Build menu cursor (0-3)
    build_cursor: usize,
    /// World size cursor on the new match popup (0-2)
    size_cursor: usize,
    /// Whether the world size popup is showing
    size_selection_mode: bool,
    /// Center the camera on the map once the viewport size is known
    recenter_pending: bool,
    /// Help screen scroll position
    help_scroll: u16,
}

impl App {
    pub fn new() -> Self {
        Self {
            camera: Camera::new(),
            map_area: Rect::default(),
            mouse_cell: None,
            selected: None,
            drag: None,
            build_cursor: 0,
            size_cursor: 1,
            size_selection_mode: false,
            recenter_pending: false,
            help_scroll: 0,
        }
    }

    /// Handle keyboard input, returns true if should quit
    pub fn handle_input(&mut self, key: KeyEvent, game: &mut Game) -> Result<bool> {
        // Global quit shortcut
        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(true);
        }

        match game.state().clone() {
            GameState::MainMenu => self.handle_main_menu_input(key, game),
            GameState::Playing(playing_state) => {
                self.handle_playing_input(key, game, playing_state)
            }
            GameState::Paused => self.handle_pause_input(key, game),
            GameState::SaveSlots { selected } => self.handle_save_slots_input(key, game, selected),
            GameState::LoadSlots { selected } => self.handle_load_slots_input(key, game, selected),
            GameState::Stats => self.handle_stats_input(key, game),
            GameState::GameOver { .. } => self.handle_game_over_input(key, game),
            GameState::Quit => Ok(true),
        }
    }

    /// Handle mouse input, returns true if should quit
    pub fn handle_mouse(&mut self, mouse: MouseEvent, game: &mut Game) -> Result<bool> {
        // The mouse only drives the world view
        let surveying = matches!(
            game.state(),
            GameState::Playing(PlayingState::Surveying)
        );
        let cell = self.cell_at(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Moved => {
                self.mouse_cell = cell;
            }
            MouseEventKind::Down(MouseButton::Left) if surveying => {
                if let Some(cell) = cell {
                    self.drag = Some(DragState {
                        last_cell: cell,
                        moved: false,
                    });
                }
            }
            MouseEventKind::Drag(MouseButton::Left) if surveying => {
                self.mouse_cell = cell;
                if let (Some(drag), Some((cx, cy))) = (self.drag.as_mut(), cell) {
                    let dx = (cx as f32 - drag.last_cell.0 as f32) * CELL_PX_W;
                    let dy = (cy as f32 - drag.last_cell.1 as f32) * CELL_PX_H;
                    if dx != 0.0 || dy != 0.0 {
                        drag.moved = true;
                        self.camera.drag_by(dx, dy);
                    }
                    drag.last_cell = (cx, cy);
                }
            }
            MouseEventKind::Up(MouseButton::Left) if surveying => {
                let was_click = self.drag.take().is_some_and(|drag| !drag.moved);
                if was_click {
                    if let Some(hex) = cell.and_then(|cell| self.hex_at(game, cell)) {
                        self.hex_click(game, hex);
                    }
                }
            }
            MouseEventKind::Down(MouseButton::Right) if surveying => {
                if let Some(hex) = cell.and_then(|cell| self.hex_at(game, cell)) {
                    let owned = game
                        .session()
                        .map(|s| s.board().owner(hex) == Some(s.current_player_id()))
                        .unwrap_or(false);
                    if owned {
                        self.selected = Some(hex);
                        self.build_cursor = 0;
                        game.set_state(GameState::Playing(PlayingState::BuildMenu {
                            target: hex,
                        }));
                    }
                }
            }
            MouseEventKind::ScrollUp if surveying => {
                let anchor = cell.map(|(cx, cy)| map_view::cell_center_px(cx, cy));
                self.camera.zoom_at(1.1, anchor);
            }
            MouseEventKind::ScrollDown if surveying => {
                let anchor = cell.map(|(cx, cy)| map_view::cell_center_px(cx, cy));
                self.camera.zoom_at(0.9, anchor);
            }
            _ => {}
        }
        Ok(false)
    }

    fn handle_main_menu_input(&mut self, key: KeyEvent, game: &mut Game) -> Result<bool> {
        if self.size_selection_mode {
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    if self.size_cursor > 0 {
                        self.size_cursor -= 1;
                    }
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if self.size_cursor < 2 {
                        self.size_cursor += 1;
                    }
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    let size = WorldSize::all()[self.size_cursor];
                    self.size_selection_mode = false;
                    game.start_new_match(None, size);
                    self.selected = None;
                    self.camera = Camera::new();
                    self.recenter_pending = true;
                }
                KeyCode::Esc => {
                    self.size_selection_mode = false;
                }
                _ => {}
            }
            return Ok(false);
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char('n') => {
                self.size_selection_mode = true;
                self.size_cursor = 1;
            }
            KeyCode::Char('l') => {
                game.set_state(GameState::LoadSlots { selected: 0 });
            }
            KeyCode::Char('s') => {
                game.set_state(GameState::Stats);
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                game.quit();
            }
            _ => {}
        }
        Ok(false)
    }

    fn handle_playing_input(
        &mut self,
        key: KeyEvent,
        game: &mut Game,
        state: PlayingState,
    ) -> Result<bool> {
        match state {
            PlayingState::Surveying => self.handle_surveying_input(key, game),
            PlayingState::BuildMenu { target } => self.handle_build_menu_input(key, game, target),
            PlayingState::Help => self.handle_help_input(key, game),
        }
    }

    fn handle_surveying_input(&mut self, key: KeyEvent, game: &mut Game) -> Result<bool> {
        match key.code {
            // Camera panning
            KeyCode::Up | KeyCode::Char('k') => self.camera.pan(0.0, -PAN_STEP),
            KeyCode::Down | KeyCode::Char('j') => self.camera.pan(0.0, PAN_STEP),
            KeyCode::Left | KeyCode::Char('h') => self.camera.pan(-PAN_STEP, 0.0),
            KeyCode::Right | KeyCode::Char('l') => self.camera.pan(PAN_STEP, 0.0),

            // Zoom about the view center
            KeyCode::Char('+') | KeyCode::Char('=') => self.zoom_view(1.1),
            KeyCode::Char('-') => self.zoom_view(0.9),

            KeyCode::Char(' ') => {
                game.end_turn();
            }

            // Claim the hex under the pointer (or view center)
            KeyCode::Char('c') => {
                let hovered = game.session().and_then(|s| self.hovered_hex(s));
                if let (Some(hex), Some(session)) = (hovered, game.session_mut()) {
                    if session.claim(hex) {
                        self.selected = Some(hex);
                    }
                }
            }

            // Open the build menu on the selected hex, falling back to hover
            KeyCode::Char('b') => {
                let target = self
                    .selected
                    .or_else(|| game.session().and_then(|s| self.hovered_hex(s)));
                if let Some(hex) = target {
                    let owned = game
                        .session()
                        .map(|s| s.board().owner(hex) == Some(s.current_player_id()))
                        .unwrap_or(false);
                    if owned {
                        self.selected = Some(hex);
                        self.build_cursor = 0;
                        game.set_state(GameState::Playing(PlayingState::BuildMenu {
                            target: hex,
                        }));
                    } else {
                        game.add_message(
                            "You can only build on hexes you own",
                            MessageCategory::Warning,
                        );
                    }
                }
            }

            // Act on the hovered hex like a click
            KeyCode::Enter => {
                let hovered = game.session().and_then(|s| self.hovered_hex(s));
                if let Some(hex) = hovered {
                    self.hex_click(game, hex);
                }
            }

            // Build directly on the selected hex
            KeyCode::Char(c @ '1'..='4') => {
                if let Some(hex) = self.selected {
                    let improvement = ImprovementType::all()[c as usize - '1' as usize];
                    if let Some(session) = game.session_mut() {
                        session.build(hex, improvement);
                    }
                }
            }

            KeyCode::Char('?') => {
                game.set_state(GameState::Playing(PlayingState::Help));
            }
            KeyCode::Esc => {
                game.set_state(GameState::Paused);
            }
            _ => {}
        }
        Ok(false)
    }

    fn handle_build_menu_input(
        &mut self,
        key: KeyEvent,
        game: &mut Game,
        target: HexCoord,
    ) -> Result<bool> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.build_cursor > 0 {
                    self.build_cursor -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.build_cursor < 3 {
                    self.build_cursor += 1;
                }
            }
            KeyCode::Enter => {
                self.try_build(game, target, ImprovementType::all()[self.build_cursor]);
            }
            KeyCode::Char(c @ '1'..='4') => {
                self.try_build(game, target, ImprovementType::all()[c as usize - '1' as usize]);
            }
            KeyCode::Esc => {
                game.set_state(GameState::Playing(PlayingState::Surveying));
            }
            _ => {}
        }
        Ok(false)
    }

    fn handle_help_input(&mut self, key: KeyEvent, game: &mut Game) -> Result<bool> {
        const HELP_LINES: u16 = 40;

        match key.code {
            KeyCode::Esc | KeyCode::Char('?') => {
                self.help_scroll = 0;
                game.set_state(GameState::Playing(PlayingState::Surveying));
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.help_scroll = self.help_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.help_scroll < HELP_LINES {
                    self.help_scroll += 1;
                }
            }
            KeyCode::PageUp => {
                self.help_scroll = self.help_scroll.saturating_sub(10);
            }
            KeyCode::PageDown => {
                self.help_scroll = (self.help_scroll + 10).min(HELP_LINES);
            }
            _ => {}
        }
        Ok(false)
    }

    fn handle_pause_input(&mut self, key: KeyEvent, game: &mut Game) -> Result<bool> {
        match key.code {
            KeyCode::Esc => {
                game.set_state(GameState::Playing(PlayingState::Surveying));
            }
            KeyCode::Char('s') => {
                game.set_state(GameState::SaveSlots { selected: 0 });
            }
            KeyCode::Char('l') => {
                game.set_state(GameState::LoadSlots { selected: 0 });
            }
            KeyCode::Char('m') => {
                game.set_state(GameState::MainMenu);
            }
            KeyCode::Char('q') => {
                game.quit();
            }
            _ => {}
        }
        Ok(false)
    }

    fn handle_save_slots_input(
        &mut self,
        key: KeyEvent,
        game: &mut Game,
        selected: u8,
    ) -> Result<bool> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                let new_selected = if selected > 0 { selected - 1 } else { 2 };
                game.set_state(GameState::SaveSlots {
                    selected: new_selected,
                });
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let new_selected = if selected < 2 { selected + 1 } else { 0 };
                game.set_state(GameState::SaveSlots {
                    selected: new_selected,
                });
            }
            KeyCode::Enter => {
                let result = match game.session() {
                    Some(session) => save_game(session, selected),
                    None => return Ok(false),
                };
                match result {
                    Ok(()) => {
                        game.add_message("Game saved successfully!", MessageCategory::System);
                        game.set_state(GameState::Playing(PlayingState::Surveying));
                    }
                    Err(e) => {
                        game.add_message(
                            format!("Failed to save: {}", e),
                            MessageCategory::System,
                        );
                        game.set_state(GameState::Paused);
                    }
                }
            }
            KeyCode::Char('d') => {
                if save_exists(selected) {
                    if let Err(e) = delete_save(selected) {
                        game.add_message(
                            format!("Failed to delete: {}", e),
                            MessageCategory::System,
                        );
                    }
                }
            }
            KeyCode::Esc => {
                game.set_state(GameState::Paused);
            }
            _ => {}
        }
        Ok(false)
    }

    fn handle_load_slots_input(
        &mut self,
        key: KeyEvent,
        game: &mut Game,
        selected: u8,
    ) -> Result<bool> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                let new_selected = if selected > 0 { selected - 1 } else { 2 };
                game.set_state(GameState::LoadSlots {
                    selected: new_selected,
                });
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let new_selected = if selected < 2 { selected + 1 } else { 0 };
                game.set_state(GameState::LoadSlots {
                    selected: new_selected,
                });
            }
            KeyCode::Enter => {
                if save_exists(selected) {
                    match load_game(selected).and_then(restore_session) {
                        Ok(session) => {
                            game.restore_session(session);
                            self.selected = None;
                            self.camera = Camera::new();
                            self.recenter_pending = true;
                        }
                        Err(e) => {
                            log::warn!("Failed to load save: {}", e);
                            game.add_message(
                                format!("Failed to load: {}", e),
                                MessageCategory::System,
                            );
                            if game.session().is_some() {
                                game.set_state(GameState::Paused);
                            } else {
                                game.set_state(GameState::MainMenu);
                            }
                        }
                    }
                }
            }
            KeyCode::Char('d') => {
                if save_exists(selected) {
                    if let Err(e) = delete_save(selected) {
                        log::warn!("Failed to delete save: {}", e);
                    }
                }
            }
            KeyCode::Esc => {
                // Back to wherever the screen was opened from
                if game.session().is_some() {
                    game.set_state(GameState::Paused);
                } else {
                    game.set_state(GameState::MainMenu);
                }
            }
            _ => {}
        }
        Ok(false)
    }

    fn handle_stats_input(&mut self, key: KeyEvent, game: &mut Game) -> Result<bool> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('s') => {
                game.set_state(GameState::MainMenu);
            }
            _ => {}
        }
        Ok(false)
    }

    fn handle_game_over_input(&mut self, key: KeyEvent, game: &mut Game) -> Result<bool> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                game.set_state(GameState::MainMenu);
            }
            _ => {}
        }
        Ok(false)
    }

    /// Claim the hex if the current player can, otherwise toggle selection.
    fn hex_click(&mut self, game: &mut Game, hex: HexCoord) {
        let session = match game.session_mut() {
            Some(session) => session,
            None => return,
        };
        if session.can_claim(hex) {
            if session.claim(hex) {
                self.selected = Some(hex);
            }
        } else if self.selected == Some(hex) {
            self.selected = None;
        } else {
            self.selected = Some(hex);
        }
    }

    fn try_build(&mut self, game: &mut Game, target: HexCoord, improvement: ImprovementType) {
        let built = match game.session_mut() {
            Some(session) => session.build(target, improvement),
            None => false,
        };
        // The menu stays open on failure so the message can be read
        if built {
            game.set_state(GameState::Playing(PlayingState::Surveying));
        }
    }

    fn zoom_view(&mut self, factor: f32) {
        let anchor = if self.map_area.width > 0 && self.map_area.height > 0 {
            Some((
                self.map_area.width as f32 * CELL_PX_W / 2.0,
                self.map_area.height as f32 * CELL_PX_H / 2.0,
            ))
        } else {
            None
        };
        self.camera.zoom_at(factor, anchor);
    }

    /// Map view cell under a terminal position
    fn cell_at(&self, column: u16, row: u16) -> Option<(u16, u16)> {
        let area = self.map_area;
        if area.width == 0 || area.height == 0 {
            return None;
        }
        if column < area.x
            || row < area.y
            || column >= area.x + area.width
            || row >= area.y + area.height
        {
            return None;
        }
        Some((column - area.x, row - area.y))
    }

    /// Canonical hex under a map view cell
    fn hex_at(&self, game: &Game, cell: (u16, u16)) -> Option<HexCoord> {
        let session = game.session()?;
        let virt = map_view::hex_at_cell(&self.camera, cell.0, cell.1);
        Some(session.map().wrap(virt))
    }

    /// Hex under the pointer, falling back to the view center
    fn hovered_hex(&self, session: &Session) -> Option<HexCoord> {
        if self.map_area.width == 0 || self.map_area.height == 0 {
            return None;
        }
        let virt = match self.mouse_cell {
            Some((cx, cy)) => map_view::hex_at_cell(&self.camera, cx, cy),
            None => map_view::center_hex(&self.camera, self.map_area),
        };
        Some(session.map().wrap(virt))
    }

    /// Render the current game state
    pub fn render(&mut self, frame: &mut Frame, game: &Game) {
        // Clear the entire screen first to prevent artifacts
        frame.render_widget(Clear, frame.area());

        match game.state() {
            GameState::MainMenu => self.render_main_menu(frame),
            GameState::Playing(state) => self.render_playing(frame, game, &state.clone()),
            GameState::Paused => self.render_pause(frame, game),
            GameState::SaveSlots { selected } => self.render_save_slots(frame, game, *selected),
            GameState::LoadSlots { selected } => self.render_load_slots(frame, *selected),
            GameState::Stats => self.render_stats(frame, game),
            GameState::GameOver { outcome } => self.render_game_over(frame, game, *outcome),
            GameState::Quit => {}
        }
    }

    fn render_main_menu(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(35),
                Constraint::Percentage(40),
                Constraint::Percentage(25),
            ])
            .split(area);

        // Title
        let title = vec![
            Line::from(Span::styled(
                "Y O U N G E R",
                Style::default().fg(Color::Rgb(185, 220, 240)),
            )),
            Line::from(""),
            Line::from(Span::styled(
                r" ____   ____  __   __    _     ____  ",
                Style::default().fg(Color::Rgb(150, 205, 235)),
            )),
            Line::from(Span::styled(
                r"|  _ \ |  _ \ \ \ / /   / \   / ___| ",
                Style::default().fg(Color::Rgb(120, 185, 225)),
            )),
            Line::from(Span::styled(
                r"| | | || |_) | \ V /   / _ \  \___ \ ",
                Style::default().fg(Color::Rgb(95, 160, 210)),
            )),
            Line::from(Span::styled(
                r"| |_| ||  _ <   | |   / ___ \  ___) |",
                Style::default().fg(Color::Rgb(70, 135, 195)),
            )),
            Line::from(Span::styled(
                r"|____/ |_| \_\  |_|  /_/   \_\|____/ ",
                Style::default().fg(Color::Rgb(50, 110, 175)),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "The great thaw begins...",
                Style::default().fg(Color::Rgb(100, 100, 100)),
            )),
        ];

        let title_para = Paragraph::new(title).alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(title_para, chunks[0]);

        // Menu options
        let menu = vec![
            Line::from(""),
            Line::from(Span::styled(
                "[N] New Match",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled("[L] Load Game", Style::default().fg(Color::White))),
            Line::from(""),
            Line::from(Span::styled("[S] Statistics", Style::default().fg(Color::Yellow))),
            Line::from(""),
            Line::from(Span::styled("[Q] Quit", Style::default().fg(Color::Gray))),
        ];

        let menu_para = Paragraph::new(menu).alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(menu_para, chunks[1]);

        // Version
        let version = Paragraph::new(format!("v{}", env!("CARGO_PKG_VERSION")))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(version, chunks[2]);

        if self.size_selection_mode {
            self.render_size_popup(frame);
        }
    }

    fn render_size_popup(&self, frame: &mut Frame) {
        let popup_area = centered_rect(50, 50, frame.area());
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" New Match ")
            .border_style(Style::default().fg(Color::Cyan));

        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Choose a world size",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(""));

        for (i, size) in WorldSize::all().iter().enumerate() {
            let is_selected = i == self.size_cursor;
            let prefix = if is_selected { "► " } else { "  " };
            let (width, height) = size.dimensions();

            let name_style = if is_selected {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            lines.push(Line::from(vec![
                Span::styled(
                    prefix,
                    if is_selected {
                        Style::default().fg(Color::Yellow)
                    } else {
                        Style::default()
                    },
                ),
                Span::styled(format!("{:<10}", size.name()), name_style),
                Span::styled(
                    format!(" {} x {} hexes", width, height),
                    Style::default().fg(Color::Gray),
                ),
            ]));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "[↑↓] Select  [Enter] Start  [Esc] Cancel",
            Style::default().fg(Color::DarkGray),
        )));

        let para = Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(para, inner);
    }

    fn render_playing(&mut self, frame: &mut Frame, game: &Game, state: &PlayingState) {
        let session = match game.session() {
            Some(session) => session,
            None => return,
        };

        // Main layout: sidebar on right
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(40), Constraint::Length(30)])
            .split(frame.area());

        // Map area with message log at bottom, sized for the recent tail
        let left_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(20),
                Constraint::Length(RECENT_MESSAGES as u16 + 2),
            ])
            .split(chunks[0]);

        self.render_map(frame, session, left_chunks[0]);
        self.render_messages(frame, session, left_chunks[1]);
        self.render_sidebar(frame, session, chunks[1]);

        match state {
            PlayingState::BuildMenu { target } => self.render_build_menu(frame, session, *target),
            PlayingState::Help => self.render_help_overlay(frame),
            PlayingState::Surveying => {}
        }
    }

    fn render_map(&mut self, frame: &mut Frame, session: &Session, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(
                " Younger Dryas - Turn {}/{} ",
                session.turn(),
                session.rules().max_turns
            ))
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.map_area = inner;

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.recenter_pending {
            let map = session.map();
            let mid = HexCoord::new(map.width as i32 / 2, map.height as i32 / 2);
            let (wx, wy) = hex_to_pixel(mid);
            self.camera.center_on(
                wx,
                wy,
                inner.width as f32 * CELL_PX_W,
                inner.height as f32 * CELL_PX_H,
            );
            self.recenter_pending = false;
        }

        let hovered = self.hovered_hex(session);
        map_view::render(frame, inner, session, &self.camera, hovered, self.selected);
    }

    fn render_messages(&self, frame: &mut Frame, session: &Session, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Messages ")
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(area);

        let messages: Vec<Line> = session
            .log()
            .recent(inner.height as usize)
            .iter()
            .map(|msg| {
                let color = match msg.category {
                    MessageCategory::Action => Color::White,
                    MessageCategory::Resource => Color::Yellow,
                    MessageCategory::System => Color::Cyan,
                    MessageCategory::Warning => Color::LightRed,
                };
                Line::from(Span::styled(&msg.text, Style::default().fg(color)))
            })
            .collect();

        let para = Paragraph::new(messages).block(block);
        frame.render_widget(para, area);
    }

    fn render_sidebar(&self, frame: &mut Frame, session: &Session, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Status ")
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let current = session.current_player_id();
        let (cr, cg, cb) = current.color();

        let mut lines = vec![
            Line::from(format!(
                "Turn: {} / {}",
                session.turn(),
                session.rules().max_turns
            )),
            Line::from(vec![
                Span::raw("Player: "),
                Span::styled(
                    current.name(),
                    Style::default()
                        .fg(Color::Rgb(cr, cg, cb))
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
        ];

        for id in PlayerId::all() {
            let (r, g, b) = id.color();
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<5}", id.name()),
                    Style::default().fg(Color::Rgb(r, g, b)),
                ),
                Span::raw(format!(
                    " {} / {} pts",
                    session.score(id),
                    session.rules().points_to_win
                )),
            ]));
        }
        lines.push(Line::from(""));

        lines.push(Line::from(Span::styled(
            "Resources:",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )));
        for (kind, amount) in session.current_player().resources() {
            let label = match kind {
                ResourceType::Food => "Food",
                ResourceType::Wood => "Wood",
                ResourceType::Stone => "Stone",
            };
            lines.push(Line::from(format!("  {}: {}", label, amount)));
        }
        lines.push(Line::from(format!(
            "Claims left: {}",
            session.claims_left()
        )));
        lines.push(Line::from(""));

        if let Some(hex) = self.selected {
            let terrain = session.map().terrain_at(hex);
            lines.push(Line::from(Span::styled(
                format!("Hex: {}", hex),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(format!("Terrain: {}", terrain.name())));
            let owner = match session.board().owner(hex) {
                Some(id) => id.name(),
                None => "None",
            };
            lines.push(Line::from(format!("Owner: {}", owner)));
            let improvement = match session.board().improvement(hex) {
                Some(improvement) => improvement.name(),
                None => "None",
            };
            lines.push(Line::from(format!("Improvement: {}", improvement)));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "Space: End Turn",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(
            "Click: Claim / Select",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(
            "Right Click: Build Menu",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(
            "?: Help  Esc: Menu",
            Style::default().fg(Color::DarkGray),
        )));

        let para = Paragraph::new(lines);
        frame.render_widget(para, inner);
    }

    fn render_build_menu(&self, frame: &mut Frame, session: &Session, target: HexCoord) {
        let area = centered_rect(44, 60, frame.area());
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Build Improvement ")
            .border_style(Style::default().fg(Color::Yellow));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let player = session.current_player();

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Build on {}", target),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));

        for (i, &improvement) in ImprovementType::all().iter().enumerate() {
            let spec = session.rules().improvement(improvement);
            let affordable = player.can_afford(&spec.cost);
            let is_selected = i == self.build_cursor;
            let prefix = if is_selected { "► " } else { "  " };

            let name_style = if !affordable {
                Style::default().fg(Color::DarkGray)
            } else if is_selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            lines.push(Line::from(vec![
                Span::styled(
                    prefix,
                    if is_selected {
                        Style::default().fg(Color::Yellow)
                    } else {
                        Style::default()
                    },
                ),
                Span::styled(format!("{}. {:<12}", i + 1, improvement.name()), name_style),
                Span::styled(
                    format!(" {}", cost_text(&spec.cost)),
                    Style::default().fg(Color::Gray),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("     +{} pts{}", spec.points, yield_text(&spec.yield_per_turn)),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "[1-4/Enter] Build  [Esc] Close",
            Style::default().fg(Color::DarkGray),
        )));

        let para = Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(para, inner);
    }

    fn render_pause(&mut self, frame: &mut Frame, game: &Game) {
        // Keep the board visible behind the menu
        self.render_playing(frame, game, &PlayingState::Surveying);

        let area = centered_rect(30, 55, frame.area());
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Game Menu ")
            .border_style(Style::default().fg(Color::White));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let menu = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("[Esc] Resume", Style::default().fg(Color::White))),
            Line::from(""),
            Line::from(Span::styled("[S] Save Game", Style::default().fg(Color::White))),
            Line::from(""),
            Line::from(Span::styled("[L] Load Game", Style::default().fg(Color::White))),
            Line::from(""),
            Line::from(Span::styled("[M] Main Menu", Style::default().fg(Color::Gray))),
            Line::from(""),
            Line::from(Span::styled("[Q] Quit", Style::default().fg(Color::Gray))),
        ])
        .alignment(ratatui::layout::Alignment::Center);

        frame.render_widget(menu, inner);
    }

    fn render_save_slots(&mut self, frame: &mut Frame, game: &Game, selected: u8) {
        self.render_playing(frame, game, &PlayingState::Surveying);

        let area = centered_rect(50, 50, frame.area());
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" SAVE GAME ")
            .border_style(Style::default().fg(Color::Yellow));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let saves = list_saves();
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Select a slot to save:",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
        ];

        for (slot, summary) in saves {
            let is_selected = slot == selected;
            let prefix = if is_selected { "> " } else { "  " };
            let style = if is_selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let slot_text = match summary {
                Some(s) => format!(
                    "{}Slot {}: Turn {} - Red {} : {} Blue",
                    prefix,
                    slot + 1,
                    s.turn,
                    s.red_points,
                    s.blue_points
                ),
                None => format!("{}Slot {}: Empty", prefix, slot + 1),
            };

            lines.push(Line::from(Span::styled(slot_text, style)));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "[Enter] Save  [D] Delete  [Esc] Cancel",
            Style::default().fg(Color::DarkGray),
        )));

        let menu = Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(menu, inner);
    }

    fn render_load_slots(&self, frame: &mut Frame, selected: u8) {
        let area = frame.area();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" LOAD GAME ")
            .border_style(Style::default().fg(Color::Cyan));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let saves = list_saves();
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Select a save to load:",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
        ];

        for (slot, summary) in saves {
            let is_selected = slot == selected;
            let prefix = if is_selected { "> " } else { "  " };

            let (slot_text, style) = match summary {
                Some(s) => {
                    let text = format!(
                        "{}Slot {}: Turn {} - Red {} : {} Blue",
                        prefix,
                        slot + 1,
                        s.turn,
                        s.red_points,
                        s.blue_points
                    );
                    let style = if is_selected {
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    (text, style)
                }
                None => {
                    let text = format!("{}Slot {}: Empty", prefix, slot + 1);
                    (text, Style::default().fg(Color::DarkGray))
                }
            };

            lines.push(Line::from(Span::styled(slot_text, style)));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "[Enter] Load  [D] Delete  [Esc] Back",
            Style::default().fg(Color::DarkGray),
        )));

        let menu = Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(menu, inner);
    }

    fn render_stats(&self, frame: &mut Frame, game: &Game) {
        let area = frame.area();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Statistics ")
            .border_style(Style::default().fg(Color::Cyan));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let stats = &game.profile().stats;
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Lifetime Results",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("Matches started:   {}", stats.matches_started)),
            Line::from(format!("Matches completed: {}", stats.matches_completed)),
            Line::from(""),
            Line::from(vec![
                Span::styled("Red wins:  ", Style::default().fg(Color::Rgb(200, 0, 0))),
                Span::raw(format!("{}", stats.red_wins)),
            ]),
            Line::from(vec![
                Span::styled("Blue wins: ", Style::default().fg(Color::Rgb(0, 0, 200))),
                Span::raw(format!("{}", stats.blue_wins)),
            ]),
            Line::from(format!("Ties:      {}", stats.ties)),
            Line::from(""),
            Line::from(format!("Rounds played: {}", stats.rounds_played)),
            Line::from(format!("Best score:    {}", stats.best_score)),
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                "[Esc] Back",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let para = Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(para, inner);
    }

    fn render_game_over(&mut self, frame: &mut Frame, game: &Game, outcome: MatchOutcome) {
        // The final board stays visible behind the verdict
        self.render_playing(frame, game, &PlayingState::Surveying);

        let area = centered_rect(44, 45, frame.area());
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Match Over ")
            .border_style(Style::default().fg(Color::Yellow));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![Line::from("")];
        match outcome {
            MatchOutcome::Winner(id) => {
                let (r, g, b) = id.color();
                let points = game.session().map(|s| s.score(id)).unwrap_or(0);
                lines.push(Line::from(Span::styled(
                    format!("{} wins with {} points!", id.name(), points),
                    Style::default()
                        .fg(Color::Rgb(r, g, b))
                        .add_modifier(Modifier::BOLD),
                )));
            }
            MatchOutcome::Tie => {
                lines.push(Line::from(Span::styled(
                    "It's a tie!",
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )));
            }
        }
        lines.push(Line::from(""));

        if let Some(session) = game.session() {
            for id in PlayerId::all() {
                let (r, g, b) = id.color();
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{:<5}", id.name()),
                        Style::default().fg(Color::Rgb(r, g, b)),
                    ),
                    Span::raw(format!(" {} points", session.score(id))),
                ]));
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press [Enter] to continue",
            Style::default().fg(Color::Gray),
        )));

        let para = Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(para, inner);
    }

    fn render_help_overlay(&self, frame: &mut Frame) {
        let area = fullscreen_overlay(frame.area());
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .border_style(Style::default().fg(Color::Cyan));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let heading = |text: &'static str| {
            Line::from(Span::styled(
                text,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ))
        };
        let entry = |keys: &'static str, what: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {:<18}", keys), Style::default().fg(Color::White)),
                Span::styled(what, Style::default().fg(Color::Gray)),
            ])
        };

        let lines = vec![
            Line::from(""),
            heading("Goal"),
            Line::from(Span::styled(
                "  Claim hexes and build improvements to score points.",
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                "  The first tribe to reach the target score wins; when the",
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                "  turn limit runs out the higher score takes the match.",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            heading("Mouse"),
            entry("Left Click", "Claim the hex, or select it"),
            entry("Right Click", "Open the build menu on your hex"),
            entry("Drag", "Pan the map"),
            entry("Scroll", "Zoom at the pointer"),
            Line::from(""),
            heading("Keys"),
            entry("Arrows / hjkl", "Pan the map"),
            entry("+ / -", "Zoom in / out"),
            entry("Enter", "Claim or select the hovered hex"),
            entry("c", "Claim the hovered hex"),
            entry("b", "Build menu on the selected hex"),
            entry("1-4", "Build directly on the selected hex"),
            entry("Space", "End your turn"),
            entry("Esc", "Game menu"),
            entry("Ctrl+Q", "Quit immediately"),
            Line::from(""),
            heading("Improvements"),
            entry("Farm", "2 wood, yields 2 food per turn"),
            entry("Lumber Camp", "3 wood, yields 2 wood per turn"),
            entry("Quarry", "2 wood 1 stone, yields 1 stone per turn"),
            entry("Settlement", "5 wood 3 stone 2 food, extends your reach"),
            Line::from(""),
            Line::from(Span::styled(
                "  Claims must stay within reach of one of your settlements;",
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                "  your first claim of the match can go anywhere.",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "[?] or [Esc] Close.  Scroll with j/k.",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let para = Paragraph::new(lines).scroll((self.help_scroll, 0));
        frame.render_widget(para, inner);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn cost_text(cost: &[(ResourceType, u32)]) -> String {
    if cost.is_empty() {
        return "free".to_string();
    }
    cost.iter()
        .map(|(kind, amount)| format!("{} {}", amount, kind.name()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn yield_text(yields: &[(ResourceType, u32)]) -> String {
    if yields.is_empty() {
        return String::new();
    }
    let parts: Vec<String> = yields
        .iter()
        .map(|(kind, amount)| format!("+{} {}/turn", amount, kind.name()))
        .collect();
    format!(", {}", parts.join(", "))
}

/// Create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Near-fullscreen overlay with a small margin that adapts to terminal size
fn fullscreen_overlay(r: Rect) -> Rect {
    let margin = if r.width > 100 && r.height > 40 { 2 } else { 1 };
    Rect {
        x: r.x + margin,
        y: r.y + margin,
        width: r.width.saturating_sub(margin * 2),
        height: r.height.saturating_sub(margin * 2),
    }
}
