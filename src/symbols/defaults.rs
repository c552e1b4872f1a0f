/// A named group of `(key, symbol)` pairs.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub name: &'static str,
    pub symbols: &'static [(&'static str, &'static str)],
}

const ARROWS: &[(&str, &str)] = &[
    ("->", "\u{2192}"),
    ("=>", "\u{21D2}"),
    ("<-", "\u{2190}"),
    ("<=", "\u{21D0}"),
    (":N:", "\u{2191}"),
    (":N2:", "\u{21D1}"),
    (":S:", "\u{2193}"),
    (":S2:", "\u{21D3}"),
    (":E:", "\u{2192}"),
    (":E2:", "\u{21D2}"),
    (":W:", "\u{2190}"),
    (":W2:", "\u{21D0}"),
];

const TYPOGRAPHY: &[(&str, &str)] = &[
    ("--", "\u{2012}"),
    ("---", "\u{2014}"),
    (":dagger:", "\u{2020}"),
    (":ddagger:", "\u{2021}"),
    (":section:", "\u{00A7}"),
    (":paragraph:", "\u{00B6}"),
];

const MATH_GENERAL: &[(&str, &str)] = &[
    (":infty:", "\u{221E}"),
    (":deg:", "\u{00B0}"),
    (":permil:", "\u{2030}"),
    (":sqrt:", "\u{221A}"),
    (":cubert:", "\u{221B}"),
    (":4thrt:", "\u{221C}"),
    (":angle:", "\u{2220}"),
    (":hbar:", "\u{210F}"),
];

const MATH_BINARY: &[(&str, &str)] = &[
    (":pm:", "\u{00B1}"),
    (":mp:", "\u{2213}"),
    (":dot:", "\u{00B7}"),
    (":times:", "\u{00D7}"),
    (":div:", "\u{00F7}"),
];

const MATH_RELATIONAL: &[(&str, &str)] = &[
    (":approx:", "\u{2248}"),
    (":equiv:", "\u{2261}"),
    (":propto:", "\u{221D}"),
    (":neq:", "\u{2260}"),
    (":geq:", "\u{2265}"),
    (":leq:", "\u{2264}"),
    (":>>:", "\u{226B}"),
    (":<<:", "\u{226A}"),
];

const MATH_SETS: &[(&str, &str)] = &[
    (":subset:", "\u{2282}"),
    (":subseteq:", "\u{2286}"),
    (":supset:", "\u{2283}"),
    (":supseteq:", "\u{2287}"),
    (":in:", "\u{2208}"),
    (":ni:", "\u{220B}"),
    (":cap:", "\u{2229}"),
    (":cup:", "\u{222A}"),
    (":emptyset:", "\u{2205}"),
];

const MATH_LOGICAL: &[(&str, &str)] = &[
    (":neg:", "\u{00AC}"),
    (":vee:", "\u{2228}"),
    (":wedge:", "\u{2227}"),
    (":forall:", "\u{2200}"),
    (":exists:", "\u{2203}"),
    (":therefore:", "\u{2234}"),
];

const MATH_CALCULUS: &[(&str, &str)] = &[
    (":nabla:", "\u{2207}"),
    (":partial:", "\u{2202}"),
    (":integral:", "\u{222B}"),
];

const FRACTIONS: &[(&str, &str)] = &[
    (":1/2:", "\u{00BD}"),
    (":1/3:", "\u{2153}"),
    (":2/3:", "\u{2154}"),
    (":1/4:", "\u{00BC}"),
    (":3/4:", "\u{00BE}"),
    (":1/5:", "\u{2155}"),
    (":2/5:", "\u{2156}"),
    (":3/5:", "\u{2157}"),
    (":4/5:", "\u{2158}"),
    (":1/6:", "\u{2159}"),
    (":5/6:", "\u{215A}"),
    (":1/7:", "\u{2150}"),
    (":1/8:", "\u{215B}"),
    (":3/8:", "\u{215C}"),
    (":5/8:", "\u{215D}"),
    (":7/8:", "\u{215E}"),
    (":1/9:", "\u{2151}"),
    (":1/10:", "\u{2152}"),
];

const GREEK_LOWER: &[(&str, &str)] = &[
    (":alpha:", "\u{03B1}"),
    (":beta:", "\u{03B2}"),
    (":gamma:", "\u{03B3}"),
    (":delta:", "\u{03B4}"),
    (":epsilon:", "\u{03B5}"),
    (":zeta:", "\u{03B6}"),
    (":eta:", "\u{03B7}"),
    (":theta:", "\u{03B8}"),
    (":iota:", "\u{03B9}"),
    (":kappa:", "\u{03BA}"),
    (":lambda:", "\u{03BB}"),
    (":mu:", "\u{03BC}"),
    (":nu:", "\u{03BD}"),
    (":xi:", "\u{03BE}"),
    (":omicron:", "\u{03BF}"),
    (":pi:", "\u{03C0}"),
    (":rho:", "\u{03C1}"),
    (":sigma:", "\u{03C3}"),
    (":tau:", "\u{03C4}"),
    (":upsilon:", "\u{03C5}"),
    (":phi:", "\u{03C6}"),
    (":chi:", "\u{03C7}"),
    (":psi:", "\u{03C8}"),
    (":omega:", "\u{03C9}"),
];

const GREEK_UPPER: &[(&str, &str)] = &[
    (":Alpha:", "\u{0391}"),
    (":Beta:", "\u{0392}"),
    (":Gamma:", "\u{0393}"),
    (":Delta:", "\u{0394}"),
    (":Epsilon:", "\u{0395}"),
    (":Zeta:", "\u{0396}"),
    (":Eta:", "\u{0397}"),
    (":Theta:", "\u{0398}"),
    (":Iota:", "\u{0399}"),
    (":Kappa:", "\u{039A}"),
    (":Lambda:", "\u{039B}"),
    (":Mu:", "\u{039C}"),
    (":Nu:", "\u{039D}"),
    (":Xi:", "\u{039E}"),
    (":Omicron:", "\u{039F}"),
    (":Pi:", "\u{03A0}"),
    (":Rho:", "\u{03A1}"),
    (":Sigma:", "\u{03A3}"),
    (":Tau:", "\u{03A4}"),
    (":Upsilon:", "\u{03A5}"),
    (":Phi:", "\u{03A6}"),
    (":Chi:", "\u{03A7}"),
    (":Psi:", "\u{03A8}"),
    (":Omega:", "\u{03A9}"),
];

const CURRENCY: &[(&str, &str)] = &[
    (":cent:", "\u{00A2}"),
    (":pound:", "\u{00A3}"),
    (":euro:", "\u{20AC}"),
    (":lira:", "\u{20A4}"),
    (":peso:", "\u{20B1}"),
    (":ruble:", "\u{20BD}"),
    (":rupee:", "\u{20B9}"),
    (":won:", "\u{20A9}"),
    (":yen:", "\u{00A5}"),
    (":yuan:", "\u{00A5}"),
];

static CATEGORIES: &[Category] = &[
    Category { name: "Arrows", symbols: ARROWS },
    Category { name: "Typography", symbols: TYPOGRAPHY },
    Category { name: "Math (General)", symbols: MATH_GENERAL },
    Category { name: "Math (Binary Operators)", symbols: MATH_BINARY },
    Category { name: "Math (Relational)", symbols: MATH_RELATIONAL },
    Category { name: "Math (Sets)", symbols: MATH_SETS },
    Category { name: "Math (Logical)", symbols: MATH_LOGICAL },
    Category { name: "Math (Calculus)", symbols: MATH_CALCULUS },
    Category { name: "Fractions", symbols: FRACTIONS },
    Category { name: "Greek (Lowercase)", symbols: GREEK_LOWER },
    Category { name: "Greek (Uppercase)", symbols: GREEK_UPPER },
    Category { name: "Currency", symbols: CURRENCY },
];

pub fn get() -> &'static [Category] {
    CATEGORIES
}
