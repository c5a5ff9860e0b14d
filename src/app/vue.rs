// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran : une ligne, alignée à droite, texte = Tampon::affichage()
// - Pavé 4 colonnes ; chaque bouton porte une Commande
// - La vue ne touche jamais le tampon directement : tout passe par executer()

use eframe::egui;

use super::etat::{Action, AppCalc, Commande};
use crate::noyau::{Jeton, Operateur};

const TAILLE_BOUTON: [f32; 2] = [64.0, 48.0];
const TAILLE_ECRAN: f32 = 32.0;

const fn chiffre(d: u8) -> Option<Commande> {
    Some(Commande::Jeton(Jeton::Chiffre(d)))
}

const fn op(o: Operateur) -> Option<Commande> {
    Some(Commande::Jeton(Jeton::Operateur(o)))
}

const fn action(a: Action) -> Option<Commande> {
    Some(Commande::Action(a))
}

/// Disposition du pavé (None = case vide).
const PAVE: [[Option<Commande>; 4]; 5] = [
    [
        action(Action::Clear),
        action(Action::Backspace),
        action(Action::Pourcent),
        op(Operateur::Divise),
    ],
    [chiffre(7), chiffre(8), chiffre(9), op(Operateur::Fois)],
    [chiffre(4), chiffre(5), chiffre(6), op(Operateur::Moins)],
    [chiffre(1), chiffre(2), chiffre(3), op(Operateur::Plus)],
    [
        None,
        chiffre(0),
        Some(Commande::Jeton(Jeton::Point)),
        action(Action::Egal),
    ],
];

fn libelle(cmd: Commande) -> String {
    match cmd {
        Commande::Jeton(Jeton::Operateur(o)) => o.libelle().to_string(),
        Commande::Jeton(j) => j.texte(),
        Commande::Action(a) => a.libelle().to_string(),
    }
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_ecran(ui);
        ui.add_space(8.0);
        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.affichage())
                            .monospace()
                            .size(TAILLE_ECRAN),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let mut clic: Option<Commande> = None;

        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE.iter() {
                    for case in ligne.iter() {
                        match case {
                            Some(cmd) => {
                                let b = egui::Button::new(
                                    egui::RichText::new(libelle(*cmd)).size(20.0),
                                );
                                if ui.add_sized(TAILLE_BOUTON, b).clicked() {
                                    clic = Some(*cmd);
                                }
                            }
                            None => {
                                ui.label("");
                            }
                        }
                    }
                    ui.end_row();
                }
            });

        if let Some(cmd) = clic {
            self.executer(cmd);
        }
    }
}
