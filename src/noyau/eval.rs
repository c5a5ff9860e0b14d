//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> pile f64 -> contrôle “fini”
//!
//! Entrée attendue : chaîne évaluable (glyphes * / - déjà traduits).
//! Pas de parenthèses, pas de variables, pas de fonctions.

use log::trace;

use super::erreur::ErreurCalcul;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_rpn, to_rpn};

/// API publique : évalue une expression à quatre opérateurs.
pub fn eval_expression(expr_str: &str) -> Result<f64, ErreurCalcul> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurCalcul::Vide);
    }

    // 1) Jetons
    let jetons = tokenize(s)?;

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    trace!("jetons: {} | rpn: {}", format_tokens(&jetons), format_tokens(&rpn));

    // 3) Valeur
    let v = eval_rpn(&rpn)?;

    // 4) Pas d’infini ni de NaN dans le tampon
    if !v.is_finite() {
        return Err(ErreurCalcul::NonFini);
    }

    Ok(v)
}
