//! Tampon d’expression (accumulateur).
//!
//! Un seul texte mutable : l’expression tapée jusqu’ici, plus le texte affiché.
//! Seules les méthodes ci-dessous le modifient.
//!
//! Contrats :
//! - Tampon vide ou suite de nombres (au plus un '.' chacun) séparés par un glyphe
//!   d’opérateur unique ; un nouvel opérateur remplace l’opérateur final.
//! - Rejet silencieux des éditions invalides : aucun changement, aucun message.
//! - Échec d’évaluation : affichage "Error" et tampon vidé.
//! - Pourcentage tout-ou-rien : le nouveau tampon est calculé en entier avant d’être posé.

use log::{debug, warn};

use super::erreur::ErreurCalcul;
use super::eval::eval_expression;
use super::format::nombre_vers_texte;
use super::glyphes::{
    est_glyphe_operateur, vers_affichage, vers_evaluable, vers_evaluable_sans_moins, Jeton,
    Operateur,
};

/// Texte affiché quand le tampon est vide.
pub const AFFICHAGE_VIDE: &str = "0";

/// Texte affiché après un échec d’évaluation.
pub const AFFICHAGE_ERREUR: &str = "Error";

#[derive(Clone, Debug)]
pub struct Tampon {
    expression: String,
    affichage: String,
}

impl Default for Tampon {
    fn default() -> Self {
        Self {
            expression: String::new(),
            affichage: AFFICHAGE_VIDE.to_string(),
        }
    }
}

impl Tampon {
    /// Expression en cours (glyphes d’affichage).
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Texte de l’écran.
    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn est_vide(&self) -> bool {
        self.expression.is_empty()
    }

    fn rafraichir(&mut self) {
        self.affichage = if self.est_vide() {
            AFFICHAGE_VIDE.to_string()
        } else {
            self.expression.clone()
        };
    }

    /// Nombre en cours de saisie : texte après le dernier glyphe d’opérateur.
    fn segment_final(&self) -> &str {
        self.expression
            .rsplit(est_glyphe_operateur)
            .next()
            .unwrap_or("")
    }

    /* ------------------------ Saisie ------------------------ */

    /// Ajoute un jeton. Renvoie false si le jeton est rejeté (tampon inchangé).
    pub fn append(&mut self, jeton: Jeton) -> bool {
        let texte = match jeton {
            // pas de second zéro en tête
            Jeton::Chiffre(0) if self.expression == "0" => {
                debug!("rejeté: zéro en tête répété");
                return false;
            }

            Jeton::Chiffre(_) => jeton.texte(),

            Jeton::Point => {
                let segment = self.segment_final();
                if segment.contains('.') {
                    debug!("rejeté: second point dans {segment:?}");
                    return false;
                }
                if segment.is_empty() {
                    "0.".to_string()
                } else {
                    ".".to_string()
                }
            }

            Jeton::Operateur(op) => {
                // seul le moins peut ouvrir une expression (signe)
                if self.expression.is_empty() && op != Operateur::Moins {
                    debug!("rejeté: {} en tête", op.glyphe());
                    return false;
                }

                // opérateur final remplacé : seul le dernier choix compte
                if self.expression.ends_with(est_glyphe_operateur) {
                    self.expression.pop();
                    self.expression.push(op.glyphe());
                    debug!("opérateur remplacé: {:?}", self.expression);
                    self.rafraichir();
                    return true;
                }

                jeton.texte()
            }
        };

        self.expression.push_str(&texte);
        debug!("ajout {texte:?} -> {:?}", self.expression);
        self.rafraichir();
        true
    }

    /// Retire le dernier caractère (aucune notion de jeton multi-caractères).
    pub fn backspace(&mut self) {
        self.expression.pop();
        self.rafraichir();
    }

    /// Remise à zéro.
    pub fn clear(&mut self) {
        self.expression.clear();
        self.rafraichir();
    }

    /* ------------------------ Pourcentage ------------------------ */

    /// Remplace le nombre final par sa valeur / 100.
    ///
    /// Seuls × et ÷ sont traduits avant la recherche du nombre final ; le moins
    /// unicode ne l’est pas (comportement historique conservé).
    ///
    /// Renvoie false (tampon et affichage inchangés) s’il n’y a pas de nombre final
    /// ou s’il ne se lit pas.
    pub fn apply_percent(&mut self) -> bool {
        let sur = vers_evaluable_sans_moins(&self.expression);

        let tete = sur.trim_end_matches(|c: char| c.is_ascii_digit() || c == '.');
        let dernier = &sur[tete.len()..];
        if dernier.is_empty() {
            debug!("pourcentage ignoré: pas de nombre final");
            return false;
        }

        let valeur = match dernier.parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                debug!("pourcentage ignoré: {dernier:?} illisible");
                return false;
            }
        };

        let nouveau = format!("{tete}{}", nombre_vers_texte(valeur / 100.0));

        // tout est calculé : on pose
        self.expression = vers_affichage(&nouveau);
        debug!("pourcentage -> {:?}", self.expression);
        self.rafraichir();
        true
    }

    /* ------------------------ Évaluation ------------------------ */

    /// Évalue le tampon.
    ///
    /// - None : rien à faire (tampon vide ou opérateur final), rien ne change.
    /// - Some(Ok(v)) : le tampon devient le texte de v (calcul en chaîne possible).
    /// - Some(Err(e)) : affichage "Error", tampon vidé.
    pub fn evaluate(&mut self) -> Option<Result<f64, ErreurCalcul>> {
        if self.expression.is_empty() {
            return None;
        }

        let s = vers_evaluable(&self.expression);
        if s.ends_with(['+', '-', '*', '/']) {
            debug!("évaluation ignorée: opérateur final dans {s:?}");
            return None;
        }

        match eval_expression(&s) {
            Ok(v) => {
                self.expression = nombre_vers_texte(v);
                debug!("{s:?} = {:?}", self.expression);
                self.rafraichir();
                Some(Ok(v))
            }
            Err(e) => {
                warn!("évaluation de {s:?} impossible: {e}");
                self.expression.clear();
                self.affichage = AFFICHAGE_ERREUR.to_string();
                Some(Err(e))
            }
        }
    }
}
