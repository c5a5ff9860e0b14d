// src/app/clavier.rs
//
// Clavier -> commandes
// --------------------
// Noms de touches façon navigateur (KeyboardEvent.key) :
// - "0".."9"          : chiffre
// - "." ou ","        : point décimal
// - "+" "-"           : opérateur tel quel
// - "*" "x" "X"       : ×
// - "/"               : ÷
// - "Enter" ou "="    : évaluer
// - "Backspace"       : effacer un caractère
// - "Escape"          : tout effacer
// Le pourcentage n’a pas de touche (bouton seulement).

use eframe::egui;

use super::etat::{Action, Commande};
use crate::noyau::{Jeton, Operateur};

/// Commande associée à une touche, ou None si la touche est ignorée.
pub fn commande_pour_touche(touche: &str) -> Option<Commande> {
    let cmd = match touche {
        "Enter" | "=" => Commande::Action(Action::Egal),
        "Backspace" => Commande::Action(Action::Backspace),
        "Escape" => Commande::Action(Action::Clear),
        "." | "," => Commande::Jeton(Jeton::Point),
        "+" => Commande::Jeton(Jeton::Operateur(Operateur::Plus)),
        "-" => Commande::Jeton(Jeton::Operateur(Operateur::Moins)),
        "*" | "x" | "X" => Commande::Jeton(Jeton::Operateur(Operateur::Fois)),
        "/" => Commande::Jeton(Jeton::Operateur(Operateur::Divise)),
        _ => {
            let mut it = touche.chars();
            match (it.next(), it.next()) {
                (Some(c), None) if c.is_ascii_digit() => Commande::Jeton(Jeton::depuis_char(c)?),
                _ => return None,
            }
        }
    };
    Some(cmd)
}

/// Traduit les événements egui d’une frame en commandes.
///
/// Caractères : seulement via Event::Text (egui émet aussi Event::Key pour
/// les chiffres, on ne les compte pas deux fois). Touches nommées : Event::Key.
pub fn commandes_depuis_evenements(events: &[egui::Event]) -> Vec<Commande> {
    let mut out = Vec::new();
    for ev in events {
        match ev {
            egui::Event::Text(t) => {
                for c in t.chars() {
                    let mut buf = [0u8; 4];
                    if let Some(cmd) = commande_pour_touche(c.encode_utf8(&mut buf)) {
                        out.push(cmd);
                    }
                }
            }
            egui::Event::Key {
                key, pressed: true, ..
            } => {
                let nom = match key {
                    egui::Key::Enter => "Enter",
                    egui::Key::Backspace => "Backspace",
                    egui::Key::Escape => "Escape",
                    _ => continue,
                };
                if let Some(cmd) = commande_pour_touche(nom) {
                    out.push(cmd);
                }
            }
            _ => {}
        }
    }
    out
}
