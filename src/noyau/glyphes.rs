// src/noyau/glyphes.rs
//
// Alphabet d’affichage
// --------------------
// Le tampon ne contient que des chiffres, '.', et les glyphes + - × ÷.
// Les glyphes évaluables (* / -) n’existent qu’aux frontières :
// - évaluation  : × ÷ − -> * / -
// - pourcentage : × ÷ -> * / (pas le moins unicode), puis retour * / -> × ÷

/// Opérateur binaire tel que l’utilisateur le voit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub const TOUS: [Operateur; 4] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
    ];

    /// Glyphe stocké dans le tampon.
    pub fn glyphe(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '×',
            Operateur::Divise => '÷',
        }
    }

    /// Libellé de bouton (moins typographique).
    pub fn libelle(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "−",
            Operateur::Fois => "×",
            Operateur::Divise => "÷",
        }
    }

    /// Reconnaît un glyphe d’affichage ou son équivalent évaluable.
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '−' => Some(Operateur::Moins),
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Divise),
            _ => Operateur::TOUS.into_iter().find(|op| op.glyphe() == c),
        }
    }
}

/// Un jeton de saisie : chiffre, point décimal ou opérateur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Jeton {
    /// Chiffre décimal, 0..=9 (voir Jeton::chiffre).
    Chiffre(u8),
    Point,
    Operateur(Operateur),
}

impl Jeton {
    /// Chiffre vérifié : None hors de 0..=9.
    pub fn chiffre(d: u8) -> Option<Self> {
        (d <= 9).then_some(Jeton::Chiffre(d))
    }

    /// Jeton depuis un caractère (',' compte comme point décimal).
    pub fn depuis_char(c: char) -> Option<Self> {
        if let Some(d) = c.to_digit(10) {
            return Jeton::chiffre(d as u8);
        }
        match c {
            '.' | ',' => Some(Jeton::Point),
            _ => Operateur::depuis_char(c).map(Jeton::Operateur),
        }
    }

    /// Texte inséré tel quel dans le tampon (hors cas "0.").
    pub fn texte(self) -> String {
        match self {
            Jeton::Chiffre(d) => d.to_string(),
            Jeton::Point => ".".to_string(),
            Jeton::Operateur(op) => op.glyphe().to_string(),
        }
    }
}

/// Vrai pour tout caractère que le tampon traite comme opérateur.
/// Le moins unicode n’en fait pas partie (le tampon ne stocke que '-').
pub fn est_glyphe_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '×' | '÷' | '*' | '/')
}

/// × ÷ − -> * / - (chaîne prête pour le noyau d’évaluation).
pub fn vers_evaluable(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '×' => '*',
            '÷' => '/',
            '−' => '-',
            autre => autre,
        })
        .collect()
}

/// × ÷ -> * / seulement. Le moins unicode reste tel quel.
pub fn vers_evaluable_sans_moins(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '×' => '*',
            '÷' => '/',
            autre => autre,
        })
        .collect()
}

/// * / -> × ÷ (retour à l’affichage).
pub fn vers_affichage(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '*' => '×',
            '/' => '÷',
            autre => autre,
        })
        .collect()
}
