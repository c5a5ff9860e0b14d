// src/noyau/jetons.rs

use super::erreur::ErreurCalcul;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    // moins unaire (décidé ici : pas de valeur juste avant)
    Neg,
}

/// Tokenize une chaîne évaluable (glyphes * / déjà traduits).
/// Supporte:
/// - nombres décimaux (ex: 12, 0.5, 5.)
/// - exposant (ex: 1e+21, 1.5e-7), forme produite par format::nombre_vers_texte
/// - opérateurs + - * /
/// - moins unaire en tête ou après un opérateur
/// - plus unaire au même endroit : sans effet, ignoré
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    // “valeur” = un nombre vient d’être lu (sert au moins unaire)
    let mut prev_was_value = false;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        match c {
            '+' if prev_was_value => out.push(Tok::Plus),
            '+' => {}
            '-' if prev_was_value => out.push(Tok::Minus),
            '-' => out.push(Tok::Neg),
            '*' => out.push(Tok::Star),
            '/' => out.push(Tok::Slash),
            _ if c.is_ascii_digit() || c == '.' => {
                let (n, fin) = lire_nombre(&chars, i)?;
                out.push(Tok::Num(n));
                i = fin;
                prev_was_value = true;
                continue;
            }
            _ => return Err(ErreurCalcul::syntaxe(format!("caractère inattendu: '{c}'"))),
        }

        prev_was_value = false;
        i += 1;
    }

    Ok(out)
}

/// Lit un littéral à partir de `debut` ; renvoie (valeur, index après le littéral).
fn lire_nombre(chars: &[char], debut: usize) -> Result<(f64, usize), ErreurCalcul> {
    let mut i = debut;

    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    let mut chiffres = i - debut;

    if i < chars.len() && chars[i] == '.' {
        i += 1;
        let start_frac = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        chiffres += i - start_frac;
    }

    if chiffres == 0 {
        return Err(ErreurCalcul::syntaxe("point décimal isolé"));
    }

    // exposant: e[+-]chiffres
    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        i += 1;
        if i < chars.len() && (chars[i] == '+' || chars[i] == '-') {
            i += 1;
        }
        let start_exp = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        if i == start_exp {
            return Err(ErreurCalcul::syntaxe("exposant sans chiffres"));
        }
    }

    // un second point collé au littéral (ex: "1.2.3" ou "1e+2.5")
    if i < chars.len() && chars[i] == '.' {
        return Err(ErreurCalcul::syntaxe("second point décimal"));
    }

    let texte: String = chars[debut..i].iter().collect();
    let n = texte
        .parse::<f64>()
        .map_err(|_| ErreurCalcul::syntaxe(format!("nombre invalide: {texte}")))?;
    Ok((n, i))
}

/// Format utilitaire (logs) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(n) => format!("{n}"),
            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Neg => "neg".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
