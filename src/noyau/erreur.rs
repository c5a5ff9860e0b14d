// src/noyau/erreur.rs

use thiserror::Error;

/// Échec d’évaluation. Côté affichage, toutes les variantes donnent "Error" ;
/// le détail ne sert qu’aux logs et aux tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("expression vide")]
    Vide,

    #[error("syntaxe invalide: {0}")]
    Syntaxe(String),

    #[error("division par zéro")]
    DivisionParZero,

    #[error("résultat non fini")]
    NonFini,
}

impl ErreurCalcul {
    pub(crate) fn syntaxe(msg: impl Into<String>) -> Self {
        Self::Syntaxe(msg.into())
    }
}
