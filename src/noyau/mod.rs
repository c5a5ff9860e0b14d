//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - glyphes.rs  : alphabet d’affichage (+ - × ÷) + traductions vers * / -
//! - tampon.rs   : accumulateur d’expression (saisie, %, évaluation, affichage)
//! - jetons.rs   : tokenisation de la chaîne évaluable
//! - rpn.rs      : shunting-yard + évaluation sur pile
//! - eval.rs     : pipeline complet
//! - format.rs   : nombre -> texte
//! - erreur.rs   : erreurs d’évaluation

pub mod erreur;
pub mod eval;
pub mod format;
pub mod glyphes;
pub mod jetons;
pub mod rpn;
pub mod tampon;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use glyphes::{Jeton, Operateur};
pub use tampon::Tampon;
