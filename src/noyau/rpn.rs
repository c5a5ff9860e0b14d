// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis l’évaluer sur pile (f64)
//
// Règles:
// - * / avant + - ; même niveau => gauche à droite
// - Neg (moins unaire) : préfixe, lie plus fort que tout le reste
// - Division par un diviseur nul => erreur (pas d’infini silencieux)

use super::erreur::ErreurCalcul;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        Tok::Num(_) => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Plus, Num(3), Star, Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Star, Plus]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // alternance stricte valeur / opérateur binaire
    let mut attend_valeur = true;

    for tok in tokens.iter().copied() {
        match tok {
            Tok::Num(_) => {
                if !attend_valeur {
                    return Err(ErreurCalcul::syntaxe("deux nombres consécutifs"));
                }
                out.push(tok);
                // les Neg en attente s’appliquent à ce nombre
                while matches!(ops.last(), Some(Tok::Neg)) {
                    if let Some(neg) = ops.pop() {
                        out.push(neg);
                    }
                }
                attend_valeur = false;
            }

            Tok::Neg => {
                if !attend_valeur {
                    return Err(ErreurCalcul::syntaxe("moins unaire mal placé"));
                }
                ops.push(tok);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                if attend_valeur {
                    return Err(ErreurCalcul::syntaxe("opérateur sans opérande gauche"));
                }

                // gauche-associatif : on sort tout ce qui lie au moins aussi fort
                while let Some(top) = ops.last() {
                    if precedence(top) >= precedence(&tok) {
                        if let Some(top) = ops.pop() {
                            out.push(top);
                        }
                    } else {
                        break;
                    }
                }

                ops.push(tok);
                attend_valeur = true;
            }
        }
    }

    if attend_valeur {
        return Err(ErreurCalcul::syntaxe("opérande manquant en fin d’expression"));
    }

    while let Some(op) = ops.pop() {
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN sur pile.
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, ErreurCalcul> {
    let mut st: Vec<f64> = Vec::new();

    for tok in rpn.iter().copied() {
        match tok {
            Tok::Num(n) => st.push(n),

            Tok::Neg => {
                let x = st.pop().ok_or_else(|| ErreurCalcul::syntaxe("expression invalide"))?;
                st.push(-x);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or_else(|| ErreurCalcul::syntaxe("expression invalide"))?;
                let a = st.pop().ok_or_else(|| ErreurCalcul::syntaxe("expression invalide"))?;

                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    Tok::Slash => {
                        if b == 0.0 {
                            return Err(ErreurCalcul::DivisionParZero);
                        }
                        a / b
                    }
                    _ => unreachable!(),
                };

                st.push(v);
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurCalcul::syntaxe("expression invalide")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::jetons::{format_tokens, tokenize};

    fn rpn_txt(s: &str) -> String {
        let t = tokenize(s).unwrap();
        format_tokens(&to_rpn(&t).unwrap())
    }

    fn valeur(s: &str) -> Result<f64, ErreurCalcul> {
        let t = tokenize(s)?;
        eval_rpn(&to_rpn(&t)?)
    }

    #[test]
    fn precedence_produit_avant_somme() {
        assert_eq!(rpn_txt("2+3*4"), "2 3 4 * +");
        assert_eq!(valeur("2+3*4"), Ok(14.0));
    }

    #[test]
    fn gauche_a_droite_meme_niveau() {
        assert_eq!(rpn_txt("8-3-2"), "8 3 - 2 -");
        assert_eq!(valeur("8-3-2"), Ok(3.0));
        assert_eq!(valeur("8/4/2"), Ok(1.0));
    }

    #[test]
    fn moins_unaire_lie_fort() {
        assert_eq!(rpn_txt("-2*3"), "2 neg 3 *");
        assert_eq!(valeur("-2*3"), Ok(-6.0));
        assert_eq!(valeur("2*-3"), Ok(-6.0));
        assert_eq!(valeur("5--3"), Ok(8.0));
    }

    #[test]
    fn division_par_zero() {
        assert_eq!(valeur("5/0"), Err(ErreurCalcul::DivisionParZero));
        assert_eq!(valeur("1+2/0.0"), Err(ErreurCalcul::DivisionParZero));
    }

    #[test]
    fn formes_invalides() {
        assert!(matches!(valeur("2+"), Err(ErreurCalcul::Syntaxe(_))));
        assert!(matches!(valeur("*2"), Err(ErreurCalcul::Syntaxe(_))));
        assert!(matches!(valeur("2**3"), Err(ErreurCalcul::Syntaxe(_))));
        assert!(matches!(valeur("-"), Err(ErreurCalcul::Syntaxe(_))));
        assert!(matches!(valeur(""), Err(ErreurCalcul::Syntaxe(_))));
    }
}
