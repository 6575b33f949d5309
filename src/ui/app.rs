//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::warn;

use crate::{Session, Stone};

use super::board_view::BoardView;
use super::theme::*;

/// Main Gomoku application
pub struct GomokuApp {
    session: Session,
    board_view: BoardView,
}

impl Default for GomokuApp {
    fn default() -> Self {
        Self {
            session: Session::with_defaults(),
            board_view: BoardView::default(),
        }
    }
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("Restart").clicked() {
                        self.session.reset();
                        ui.close_menu();
                    }
                    if ui.button("Undo").clicked() {
                        self.session.rewind();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "{}x{} - {} in a row",
                        self.session.rows(),
                        self.session.cols(),
                        self.session.win_len()
                    ));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_status_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.session.winner().is_some() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render title card
    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Render the turn/status card
    ///
    /// Mirrors the classic status line: "Winner: ..." once the game is
    /// decided, "Next player: ..." otherwise.
    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let (stone, label) = match self.session.winner() {
                Some(winner) => (winner, "WINS"),
                None => (self.session.turn(), "to move"),
            };

            let (stone_char, color_name, accent) = if stone == Stone::Black {
                ("●", "BLACK", egui::Color32::from_rgb(70, 70, 75))
            } else {
                ("○", "WHITE", egui::Color32::from_rgb(220, 220, 225))
            };

            ui.horizontal(|ui| {
                let stone_color = if stone == Stone::Black {
                    TEXT_PRIMARY
                } else {
                    egui::Color32::from_rgb(30, 30, 35)
                };

                let (rect, _) = ui.allocate_exact_size(Vec2::new(44.0, 44.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(26.0),
                    stone_color,
                );

                ui.add_space(10.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(color_name).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(label).size(12.0).color(TEXT_SECONDARY));
                });
            });
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button(RichText::new("↩ Undo").size(12.0)).clicked() {
                    self.session.rewind();
                }
                ui.add_space(4.0);
                if ui.button(RichText::new("⟳ Restart").size(12.0)).clicked() {
                    self.session.reset();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.session.move_number()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render game over card
    fn render_game_over_card(&self, ui: &mut egui::Ui) {
        let Some(winner) = self.session.winner() else {
            return;
        };
        let (name, symbol) = if winner == Stone::Black {
            ("BLACK", "●")
        } else {
            ("WHITE", "○")
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(14.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("GAME OVER")
                            .size(12.0)
                            .color(egui::Color32::from_rgb(180, 255, 180)),
                    );
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(format!("{} {} WINS", symbol, name))
                            .size(16.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("{} in a row", self.session.win_len()))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let clicked = self.board_view.show(
                ui,
                self.session.current(),
                self.session.turn(),
                self.session.last_move(),
                self.session.winning_line(),
                self.session.winner().is_some(),
            );

            if let Some(index) = clicked {
                // Occupied cells and post-game clicks come back as Ignored;
                // OutOfRange cannot happen for a click inside the grid
                if let Err(err) = self.session.play(index) {
                    warn!(%err, index, "rejected move");
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // U - Undo
            if i.key_pressed(egui::Key::U) {
                self.session.rewind();
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.session.reset();
            }
        });
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
