//! Read-only contact table with zebra striping and brand-colored selection.

use crate::app::contacts::Contact;
use crate::app::theme::Palette;
use eframe::egui;
use egui::{Align, Color32, CornerRadius, Layout, RichText, Sense, Stroke, Ui};
use egui_extras::{Column, TableBuilder};

pub const COLUMNS: [&str; 4] = ["ID", "Name", "Email", "Phone"];
const HEADER_HEIGHT: f32 = 36.0;
const ROW_HEIGHT: f32 = 30.0;
const CELL_PADDING_X: f32 = 10.0;

/// One table row, copied out of a [`Contact`] at refresh time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<&Contact> for ContactRow {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id.clone(),
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
        }
    }
}

impl ContactRow {
    pub fn cells(&self) -> [&str; 4] {
        [&self.id, &self.name, &self.email, &self.phone]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowColors {
    pub background: Color32,
    pub foreground: Color32,
}

/// Colors for the row at `index`.
///
/// Selection wins over parity: a selected row is always brand on white.
/// Even rows take the palette background instead of a fixed white so the dark
/// theme has no bright bands.
pub fn row_colors(index: usize, selected: bool, palette: &Palette) -> RowColors {
    if selected {
        return RowColors {
            background: palette.brand,
            foreground: Color32::WHITE,
        };
    }
    RowColors {
        background: if index % 2 == 0 {
            palette.background
        } else {
            palette.table_stripe
        },
        foreground: palette.text_primary,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEvent {
    Selected(usize),
    /// Row double-clicked
    Activated(usize),
}

#[derive(Debug, Default)]
pub struct ContactTable {
    rows: Vec<ContactRow>,
    selected: Option<usize>,
}

impl ContactTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every row with `contacts`, in order, and clear the selection
    pub fn refresh(&mut self, contacts: &[Contact]) {
        self.rows = contacts.iter().map(ContactRow::from).collect();
        self.selected = None;
        tracing::debug!("Contact table refreshed with {} rows", self.rows.len());
    }

    pub fn rows(&self) -> &[ContactRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Select a row; out-of-range indices clear the selection
    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.rows.len());
    }

    pub fn selected_row(&self) -> Option<&ContactRow> {
        self.selected.and_then(|i| self.rows.get(i))
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_row().map(|row| row.id.as_str())
    }

    pub fn show(&mut self, ui: &mut Ui, palette: &Palette) -> Option<TableEvent> {
        let mut event = None;
        let rows = &self.rows;
        let selected = self.selected;

        ui.scope(|ui| {
            ui.spacing_mut().item_spacing = egui::Vec2::ZERO;

            TableBuilder::new(ui)
                .id_salt("contact_table")
                .striped(false)
                .resizable(true)
                .sense(Sense::click())
                .cell_layout(Layout::left_to_right(Align::Center))
                .column(Column::initial(110.0).at_least(60.0))
                .column(Column::initial(220.0).at_least(120.0))
                .column(Column::initial(280.0).at_least(120.0))
                .column(Column::remainder().at_least(100.0))
                .min_scrolled_height(0.0)
                .header(HEADER_HEIGHT, |mut header| {
                    for title in COLUMNS {
                        header.col(|ui| {
                            let rect = ui.max_rect();
                            ui.painter().hline(
                                rect.x_range(),
                                rect.bottom() - 0.5,
                                Stroke::new(1.0, palette.panel_border),
                            );
                            ui.add_space(CELL_PADDING_X);
                            ui.add(
                                egui::Label::new(
                                    RichText::new(title)
                                        .strong()
                                        .size(16.0)
                                        .color(palette.text_primary),
                                )
                                .selectable(false),
                            );
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                        let index = row.index();
                        let colors = row_colors(index, selected == Some(index), palette);

                        for cell in rows[index].cells() {
                            row.col(|ui| {
                                ui.painter().rect_filled(
                                    ui.max_rect(),
                                    CornerRadius::ZERO,
                                    colors.background,
                                );
                                ui.add_space(CELL_PADDING_X);
                                ui.add(
                                    egui::Label::new(
                                        RichText::new(cell).size(15.0).color(colors.foreground),
                                    )
                                    .selectable(false)
                                    .truncate(),
                                );
                            });
                        }

                        let response = row.response();
                        if response.double_clicked() {
                            event = Some(TableEvent::Activated(index));
                        } else if response.clicked() {
                            event = Some(TableEvent::Selected(index));
                        }
                    });
                });
        });

        if let Some(TableEvent::Selected(index) | TableEvent::Activated(index)) = event {
            self.selected = Some(index);
        }
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::theme::Theme;
    use egui_kittest::Harness;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Contact> {
        vec![
            Contact::new("1", "Ada", "ada@example.com", "555-0100"),
            Contact::new("2", "Grace", "grace@example.com", "555-0101"),
            Contact::new("3", "Linus", "linus@example.com", "555-0102"),
        ]
    }

    #[test]
    fn test_refresh_empty_yields_no_rows() {
        let mut table = ContactTable::new();
        table.refresh(&sample());
        table.refresh(&[]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_refresh_preserves_order_one_to_one() {
        let contacts = sample();
        let mut table = ContactTable::new();
        table.refresh(&contacts);

        let ids: Vec<&str> = table.rows().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(table.rows()[1].cells(), ["2", "Grace", "grace@example.com", "555-0101"]);
    }

    #[test]
    fn test_refresh_clears_selection() {
        let mut table = ContactTable::new();
        table.refresh(&sample());
        table.select(Some(2));
        assert_eq!(table.selected_id(), Some("3"));

        table.refresh(&sample());
        assert_eq!(table.selected_index(), None);
    }

    #[test]
    fn test_select_out_of_range_clears() {
        let mut table = ContactTable::new();
        table.refresh(&sample());
        table.select(Some(9));
        assert!(table.selected_row().is_none());
    }

    #[test]
    fn test_row_parity_colors() {
        for theme in [Theme::Light, Theme::Dark] {
            let palette = theme.palette();
            for index in 0..6 {
                let colors = row_colors(index, false, palette);
                let expected = if index % 2 == 1 {
                    palette.table_stripe
                } else {
                    palette.background
                };
                assert_eq!(colors.background, expected);
                assert_eq!(colors.foreground, palette.text_primary);
            }
        }
    }

    #[test]
    fn test_selected_row_is_brand_regardless_of_parity() {
        let palette = Theme::Light.palette();
        for index in 0..4 {
            let colors = row_colors(index, true, palette);
            assert_eq!(colors.background, palette.brand);
            assert_eq!(colors.foreground, Color32::WHITE);
        }
    }

    #[test]
    fn test_table_renders_in_both_themes() {
        for theme in [Theme::Light, Theme::Dark] {
            let mut table = ContactTable::new();
            table.refresh(&sample());
            table.select(Some(1));
            let mut harness = Harness::new_ui(|ui| {
                table.show(ui, theme.palette());
            });
            harness.step();
        }
    }
}
