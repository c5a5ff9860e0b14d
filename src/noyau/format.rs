// src/noyau/format.rs
//
// Nombre -> texte “par défaut” (pas de précision imposée).
// - chiffres : plus courte écriture qui relit le même f64 (via {:e})
// - notation décimale si 1e-7 <= |x| < 1e21, sinon d.ddde±n
// - -0 s’affiche "0"

/// Texte d’un nombre, tel qu’il sera remis dans le tampon.
pub fn nombre_vers_texte(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }

    let (chiffres, n) = decompose(x.abs());
    let corps = compose(&chiffres, n);

    if x < 0.0 {
        format!("-{corps}")
    } else {
        corps
    }
}

/// a > 0 -> (chiffres significatifs, n) avec a = 0.chiffres × 10^n.
/// {:e} sur un f64 fini non nul donne toujours "mantisse" 'e' "exposant entier".
fn decompose(a: f64) -> (String, i32) {
    let sci = format!("{a:e}");
    let Some((mantisse, exp)) = sci.split_once('e') else {
        unreachable!("{{:e}} sans exposant: {sci}")
    };
    let Ok(exp) = exp.parse::<i32>() else {
        unreachable!("exposant illisible: {sci}")
    };
    let chiffres: String = mantisse.chars().filter(|c| *c != '.').collect();
    (chiffres, exp + 1)
}

fn compose(chiffres: &str, n: i32) -> String {
    let k = chiffres.len() as i32;

    // entier (éventuellement complété de zéros)
    if k <= n && n <= 21 {
        return format!("{chiffres}{}", "0".repeat((n - k) as usize));
    }

    // point à l’intérieur des chiffres
    if 0 < n && n <= 21 {
        let (ent, frac) = chiffres.split_at(n as usize);
        return format!("{ent}.{frac}");
    }

    // 0.000ddd
    if -6 < n && n <= 0 {
        return format!("0.{}{chiffres}", "0".repeat((-n) as usize));
    }

    // exponentielle
    let e = n - 1;
    let signe = if e >= 0 { '+' } else { '-' };
    let (tete, reste) = chiffres.split_at(1);
    if reste.is_empty() {
        format!("{tete}e{signe}{}", e.abs())
    } else {
        format!("{tete}.{reste}e{signe}{}", e.abs())
    }
}
