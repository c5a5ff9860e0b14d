//! src/app/etat.rs
//!
//! État de session (sans vue).
//!
//! Rôle : posséder l’unique tampon de la session et y router les commandes,
//! qu’elles viennent du pavé (vue.rs) ou du clavier (clavier.rs).
//!
//! Contrats :
//! - Aucune logique d’édition ici : tout passe par noyau::Tampon.
//! - Une commande = une opération complète du tampon, exécutée jusqu’au bout.

use log::debug;

use crate::noyau::{Jeton, Tampon};

/// Action nommée (bouton ou touche), distincte de la saisie d’un jeton.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Clear,
    Backspace,
    Pourcent,
    Egal,
}

impl Action {
    pub fn libelle(self) -> &'static str {
        match self {
            Action::Clear => "C",
            Action::Backspace => "DEL",
            Action::Pourcent => "%",
            Action::Egal => "=",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    Jeton(Jeton),
    Action(Action),
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub tampon: Tampon,
}

impl AppCalc {
    /// Point d’entrée unique des entrées utilisateur.
    pub fn executer(&mut self, cmd: Commande) {
        match cmd {
            Commande::Jeton(j) => {
                self.tampon.append(j);
            }
            Commande::Action(Action::Clear) => self.tampon.clear(),
            Commande::Action(Action::Backspace) => self.tampon.backspace(),
            Commande::Action(Action::Pourcent) => {
                self.tampon.apply_percent();
            }
            Commande::Action(Action::Egal) => {
                self.tampon.evaluate();
            }
        }
        debug!("{cmd:?} -> {:?}", self.tampon.expression());
    }

    /// Texte de l’écran.
    pub fn affichage(&self) -> &str {
        self.tampon.affichage()
    }
}
