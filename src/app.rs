// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + clavier.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier : lu ici, une fois par frame, avant la vue.
// Enter est consommé pour ne pas activer un bouton qui aurait le focus.

pub mod clavier;
pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let cmds = ctx.input_mut(|i| {
            let cmds = clavier::commandes_depuis_evenements(&i.events);
            i.consume_key(egui::Modifiers::NONE, egui::Key::Enter);
            cmds
        });
        for cmd in cmds {
            self.executer(cmd);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
