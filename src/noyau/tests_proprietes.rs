//! Tests de propriétés : le tampon face à des séquences de touches arbitraires.
//!
//! - invariants de forme (jamais deux opérateurs collés, un seul point par nombre)
//! - règles de saisie vérifiées pour toute entrée, pas seulement les exemples
//! - l’affichage suit toujours le tampon

use proptest::prelude::*;

use super::glyphes::{est_glyphe_operateur, Jeton, Operateur};
use super::tampon::Tampon;

/* ------------------------ Stratégies ------------------------ */

fn chiffre() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

fn chiffre_non_nul() -> impl Strategy<Value = u8> {
    1u8..=9u8
}

fn operateur() -> impl Strategy<Value = Operateur> {
    prop_oneof![
        Just(Operateur::Plus),
        Just(Operateur::Moins),
        Just(Operateur::Fois),
        Just(Operateur::Divise),
    ]
}

fn jeton() -> impl Strategy<Value = Jeton> {
    prop_oneof![
        4 => chiffre().prop_map(Jeton::Chiffre),
        1 => Just(Jeton::Point),
        2 => operateur().prop_map(Jeton::Operateur),
    ]
}

#[derive(Clone, Copy, Debug)]
enum Touche {
    Jeton(Jeton),
    Backspace,
    Clear,
    Pourcent,
    Egal,
}

fn touche() -> impl Strategy<Value = Touche> {
    prop_oneof![
        8 => jeton().prop_map(Touche::Jeton),
        1 => Just(Touche::Backspace),
        1 => Just(Touche::Clear),
        1 => Just(Touche::Pourcent),
        1 => Just(Touche::Egal),
    ]
}

fn saisir(jetons: &[Jeton]) -> Tampon {
    let mut t = Tampon::default();
    for j in jetons {
        t.append(*j);
    }
    t
}

/// Forme du tampon obtenue par saisie seule : opérande (un point au plus)
/// entre deux opérateurs, jamais deux opérateurs de suite hors signe de tête.
fn forme_valide(expr: &str) -> bool {
    let chars: Vec<char> = expr.chars().collect();
    for w in chars.windows(2) {
        if est_glyphe_operateur(w[0]) && est_glyphe_operateur(w[1]) {
            return false;
        }
    }
    expr.split(est_glyphe_operateur)
        .all(|seg| seg.matches('.').count() <= 1)
}

/* ------------------------ Saisie ------------------------ */

proptest! {
    #[test]
    fn prop_chiffres_concatenes(premier in chiffre_non_nul(), reste in prop::collection::vec(chiffre(), 0..20)) {
        let mut jetons = vec![Jeton::Chiffre(premier)];
        jetons.extend(reste.iter().map(|d| Jeton::Chiffre(*d)));
        let t = saisir(&jetons);

        let attendu: String = jetons.iter().map(|j| j.texte()).collect();
        prop_assert_eq!(t.expression(), attendu.as_str());
        prop_assert_eq!(t.affichage(), attendu.as_str());
    }

    #[test]
    fn prop_zero_en_tete_jamais_double(n in 1usize..10) {
        let t = saisir(&vec![Jeton::Chiffre(0); n]);
        prop_assert_eq!(t.expression(), "0");
    }

    #[test]
    fn prop_forme_toujours_valide(jetons in prop::collection::vec(jeton(), 0..40)) {
        let t = saisir(&jetons);
        prop_assert!(forme_valide(t.expression()), "forme invalide: {:?}", t.expression());
    }

    #[test]
    fn prop_second_point_rejete(avant in prop::collection::vec(jeton(), 0..20), d in chiffre()) {
        let mut t = saisir(&avant);
        t.append(Jeton::Point);
        t.append(Jeton::Chiffre(d));
        let fige = t.expression().to_string();

        prop_assert!(!t.append(Jeton::Point));
        prop_assert_eq!(t.expression(), fige.as_str());
    }

    #[test]
    fn prop_point_apres_operateur(avant in prop::collection::vec(chiffre_non_nul(), 1..6), op in operateur()) {
        let jetons: Vec<Jeton> = avant.iter().map(|d| Jeton::Chiffre(*d)).collect();
        let mut t = saisir(&jetons);
        t.append(Jeton::Operateur(op));
        let base = t.expression().to_string();

        t.append(Jeton::Point);
        prop_assert_eq!(t.expression(), format!("{base}0."));
    }

    #[test]
    fn prop_operateur_remplace(avant in prop::collection::vec(chiffre_non_nul(), 1..6), op1 in operateur(), op2 in operateur()) {
        let jetons: Vec<Jeton> = avant.iter().map(|d| Jeton::Chiffre(*d)).collect();
        let mut t = saisir(&jetons);
        let base = t.expression().to_string();

        t.append(Jeton::Operateur(op1));
        t.append(Jeton::Operateur(op2));
        prop_assert_eq!(t.expression(), format!("{base}{}", op2.glyphe()));
    }

    #[test]
    fn prop_operateur_en_tete(op in operateur()) {
        let mut t = Tampon::default();
        let accepte = t.append(Jeton::Operateur(op));
        prop_assert_eq!(accepte, op == Operateur::Moins);
        prop_assert_eq!(t.expression(), if accepte { "-" } else { "" });
    }
}

/* ------------------------ Actions ------------------------ */

proptest! {
    #[test]
    fn prop_clear_toujours_vide(touches in prop::collection::vec(touche(), 0..40)) {
        let mut t = Tampon::default();
        for k in &touches {
            jouer(&mut t, *k);
        }
        t.clear();
        prop_assert!(t.est_vide());
        prop_assert_eq!(t.affichage(), "0");
    }

    #[test]
    fn prop_affichage_suit_le_tampon(touches in prop::collection::vec(touche(), 0..40)) {
        let mut t = Tampon::default();
        for k in &touches {
            jouer(&mut t, *k);
            let e = t.expression();
            let a = t.affichage();
            if e.is_empty() {
                prop_assert!(a == "0" || a == "Error", "affichage {a:?} pour tampon vide");
            } else {
                prop_assert_eq!(a, e);
            }
        }
    }

    #[test]
    fn prop_operateur_final_jamais_evalue(jetons in prop::collection::vec(jeton(), 0..30), op in operateur()) {
        let mut t = saisir(&jetons);
        if t.append(Jeton::Operateur(op)) {
            let (e, a) = (t.expression().to_string(), t.affichage().to_string());
            prop_assert!(t.evaluate().is_none());
            prop_assert_eq!(t.expression(), e.as_str());
            prop_assert_eq!(t.affichage(), a.as_str());
        }
    }

    #[test]
    fn prop_pourcentage_divise_par_cent(n in 0u32..1_000_000) {
        let jetons: Vec<Jeton> = n
            .to_string()
            .chars()
            .filter_map(Jeton::depuis_char)
            .collect();
        let mut t = saisir(&jetons);
        prop_assert!(t.apply_percent());

        let v: f64 = t.expression().parse().unwrap();
        prop_assert_eq!(v, f64::from(n) / 100.0);
    }
}

fn jouer(t: &mut Tampon, k: Touche) {
    match k {
        Touche::Jeton(j) => {
            t.append(j);
        }
        Touche::Backspace => t.backspace(),
        Touche::Clear => t.clear(),
        Touche::Pourcent => {
            t.apply_percent();
        }
        Touche::Egal => {
            t.evaluate();
        }
    }
}
