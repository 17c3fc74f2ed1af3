//! The WHATWG named character reference table and its lookup trie.
//!
//! <https://html.spec.whatwg.org/multipage/named-characters.html>

use once_cell::sync::Lazy;

/// One row of the named reference table: the entity name (including the
/// leading `&`, with or without the trailing `;`) and its replacement
/// characters.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct NamedReference {
    pub name: &'static str,
    pub characters: &'static str,
}

/// Trie over the bytes of every entity name, built once and shared by all
/// tokenizer instances.
pub(crate) static NAMED_REFERENCE_TRIE: Lazy<NamedReferenceTrie> =
    Lazy::new(|| NamedReferenceTrie::build(&NAMED_REFERENCES));

pub(crate) struct NamedReferenceTrie {
    nodes: Vec<TrieNode>,
}

/// Entity names are sparse, so each node keeps a sorted edge list instead of
/// a 256-way child array.
#[derive(Default)]
struct TrieNode {
    edges: Vec<(u8, u32)>,
    entity: Option<u16>,
}

impl NamedReferenceTrie {
    fn build(table: &'static [NamedReference]) -> Self {
        let mut trie = NamedReferenceTrie {
            nodes: vec![TrieNode::default()],
        };

        for (row, reference) in table.iter().enumerate() {
            trie.insert(reference.name.as_bytes(), row as u16);
        }

        trie
    }

    fn insert(&mut self, name: &[u8], row: u16) {
        let mut node = 0usize;

        for &byte in name {
            let search = self.nodes[node].edges.binary_search_by_key(&byte, |edge| edge.0);
            node = match search {
                Ok(position) => self.nodes[node].edges[position].1 as usize,
                Err(position) => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].edges.insert(position, (byte, child as u32));
                    child
                }
            };
        }

        self.nodes[node].entity = Some(row);
    }

    /// Descends the trie by every byte of `prefix`. Returns the node reached,
    /// or `None` as soon as an edge is missing.
    pub(crate) fn find(&self, prefix: &[u8]) -> Option<TrieCursor> {
        let mut node = 0usize;

        for &byte in prefix {
            let edges = &self.nodes[node].edges;
            match edges.binary_search_by_key(&byte, |edge| edge.0) {
                Ok(position) => node = edges[position].1 as usize,
                Err(_) => return None,
            }
        }

        Some(TrieCursor { trie: self, node })
    }
}

/// A position in the trie reached by [`NamedReferenceTrie::find`].
pub(crate) struct TrieCursor<'a> {
    trie: &'a NamedReferenceTrie,
    node: usize,
}

impl TrieCursor<'_> {
    /// The table row this prefix completes, if the prefix is an entire
    /// entity name.
    pub(crate) fn entity(&self) -> Option<&'static NamedReference> {
        self.trie.nodes[self.node]
            .entity
            .map(|row| &NAMED_REFERENCES[row as usize])
    }
}

const fn row(name: &'static str, characters: &'static str) -> NamedReference {
    NamedReference { name, characters }
}

#[rustfmt::skip]
pub(crate) static NAMED_REFERENCES: [NamedReference; 2231] = [
    row("&AElig", "\u{c6}"),
    row("&AElig;", "\u{c6}"),
    row("&AMP", "&"),
    row("&AMP;", "&"),
    row("&Aacute", "\u{c1}"),
    row("&Aacute;", "\u{c1}"),
    row("&Abreve;", "\u{102}"),
    row("&Acirc", "\u{c2}"),
    row("&Acirc;", "\u{c2}"),
    row("&Acy;", "\u{410}"),
    row("&Afr;", "\u{1d504}"),
    row("&Agrave", "\u{c0}"),
    row("&Agrave;", "\u{c0}"),
    row("&Alpha;", "\u{391}"),
    row("&Amacr;", "\u{100}"),
    row("&And;", "\u{2a53}"),
    row("&Aogon;", "\u{104}"),
    row("&Aopf;", "\u{1d538}"),
    row("&ApplyFunction;", "\u{2061}"),
    row("&Aring", "\u{c5}"),
    row("&Aring;", "\u{c5}"),
    row("&Ascr;", "\u{1d49c}"),
    row("&Assign;", "\u{2254}"),
    row("&Atilde", "\u{c3}"),
    row("&Atilde;", "\u{c3}"),
    row("&Auml", "\u{c4}"),
    row("&Auml;", "\u{c4}"),
    row("&Backslash;", "\u{2216}"),
    row("&Barv;", "\u{2ae7}"),
    row("&Barwed;", "\u{2306}"),
    row("&Bcy;", "\u{411}"),
    row("&Because;", "\u{2235}"),
    row("&Bernoullis;", "\u{212c}"),
    row("&Beta;", "\u{392}"),
    row("&Bfr;", "\u{1d505}"),
    row("&Bopf;", "\u{1d539}"),
    row("&Breve;", "\u{2d8}"),
    row("&Bscr;", "\u{212c}"),
    row("&Bumpeq;", "\u{224e}"),
    row("&CHcy;", "\u{427}"),
    row("&COPY", "\u{a9}"),
    row("&COPY;", "\u{a9}"),
    row("&Cacute;", "\u{106}"),
    row("&Cap;", "\u{22d2}"),
    row("&CapitalDifferentialD;", "\u{2145}"),
    row("&Cayleys;", "\u{212d}"),
    row("&Ccaron;", "\u{10c}"),
    row("&Ccedil", "\u{c7}"),
    row("&Ccedil;", "\u{c7}"),
    row("&Ccirc;", "\u{108}"),
    row("&Cconint;", "\u{2230}"),
    row("&Cdot;", "\u{10a}"),
    row("&Cedilla;", "\u{b8}"),
    row("&CenterDot;", "\u{b7}"),
    row("&Cfr;", "\u{212d}"),
    row("&Chi;", "\u{3a7}"),
    row("&CircleDot;", "\u{2299}"),
    row("&CircleMinus;", "\u{2296}"),
    row("&CirclePlus;", "\u{2295}"),
    row("&CircleTimes;", "\u{2297}"),
    row("&ClockwiseContourIntegral;", "\u{2232}"),
    row("&CloseCurlyDoubleQuote;", "\u{201d}"),
    row("&CloseCurlyQuote;", "\u{2019}"),
    row("&Colon;", "\u{2237}"),
    row("&Colone;", "\u{2a74}"),
    row("&Congruent;", "\u{2261}"),
    row("&Conint;", "\u{222f}"),
    row("&ContourIntegral;", "\u{222e}"),
    row("&Copf;", "\u{2102}"),
    row("&Coproduct;", "\u{2210}"),
    row("&CounterClockwiseContourIntegral;", "\u{2233}"),
    row("&Cross;", "\u{2a2f}"),
    row("&Cscr;", "\u{1d49e}"),
    row("&Cup;", "\u{22d3}"),
    row("&CupCap;", "\u{224d}"),
    row("&DD;", "\u{2145}"),
    row("&DDotrahd;", "\u{2911}"),
    row("&DJcy;", "\u{402}"),
    row("&DScy;", "\u{405}"),
    row("&DZcy;", "\u{40f}"),
    row("&Dagger;", "\u{2021}"),
    row("&Darr;", "\u{21a1}"),
    row("&Dashv;", "\u{2ae4}"),
    row("&Dcaron;", "\u{10e}"),
    row("&Dcy;", "\u{414}"),
    row("&Del;", "\u{2207}"),
    row("&Delta;", "\u{394}"),
    row("&Dfr;", "\u{1d507}"),
    row("&DiacriticalAcute;", "\u{b4}"),
    row("&DiacriticalDot;", "\u{2d9}"),
    row("&DiacriticalDoubleAcute;", "\u{2dd}"),
    row("&DiacriticalGrave;", "`"),
    row("&DiacriticalTilde;", "\u{2dc}"),
    row("&Diamond;", "\u{22c4}"),
    row("&DifferentialD;", "\u{2146}"),
    row("&Dopf;", "\u{1d53b}"),
    row("&Dot;", "\u{a8}"),
    row("&DotDot;", "\u{20dc}"),
    row("&DotEqual;", "\u{2250}"),
    row("&DoubleContourIntegral;", "\u{222f}"),
    row("&DoubleDot;", "\u{a8}"),
    row("&DoubleDownArrow;", "\u{21d3}"),
    row("&DoubleLeftArrow;", "\u{21d0}"),
    row("&DoubleLeftRightArrow;", "\u{21d4}"),
    row("&DoubleLeftTee;", "\u{2ae4}"),
    row("&DoubleLongLeftArrow;", "\u{27f8}"),
    row("&DoubleLongLeftRightArrow;", "\u{27fa}"),
    row("&DoubleLongRightArrow;", "\u{27f9}"),
    row("&DoubleRightArrow;", "\u{21d2}"),
    row("&DoubleRightTee;", "\u{22a8}"),
    row("&DoubleUpArrow;", "\u{21d1}"),
    row("&DoubleUpDownArrow;", "\u{21d5}"),
    row("&DoubleVerticalBar;", "\u{2225}"),
    row("&DownArrow;", "\u{2193}"),
    row("&DownArrowBar;", "\u{2913}"),
    row("&DownArrowUpArrow;", "\u{21f5}"),
    row("&DownBreve;", "\u{311}"),
    row("&DownLeftRightVector;", "\u{2950}"),
    row("&DownLeftTeeVector;", "\u{295e}"),
    row("&DownLeftVector;", "\u{21bd}"),
    row("&DownLeftVectorBar;", "\u{2956}"),
    row("&DownRightTeeVector;", "\u{295f}"),
    row("&DownRightVector;", "\u{21c1}"),
    row("&DownRightVectorBar;", "\u{2957}"),
    row("&DownTee;", "\u{22a4}"),
    row("&DownTeeArrow;", "\u{21a7}"),
    row("&Downarrow;", "\u{21d3}"),
    row("&Dscr;", "\u{1d49f}"),
    row("&Dstrok;", "\u{110}"),
    row("&ENG;", "\u{14a}"),
    row("&ETH", "\u{d0}"),
    row("&ETH;", "\u{d0}"),
    row("&Eacute", "\u{c9}"),
    row("&Eacute;", "\u{c9}"),
    row("&Ecaron;", "\u{11a}"),
    row("&Ecirc", "\u{ca}"),
    row("&Ecirc;", "\u{ca}"),
    row("&Ecy;", "\u{42d}"),
    row("&Edot;", "\u{116}"),
    row("&Efr;", "\u{1d508}"),
    row("&Egrave", "\u{c8}"),
    row("&Egrave;", "\u{c8}"),
    row("&Element;", "\u{2208}"),
    row("&Emacr;", "\u{112}"),
    row("&EmptySmallSquare;", "\u{25fb}"),
    row("&EmptyVerySmallSquare;", "\u{25ab}"),
    row("&Eogon;", "\u{118}"),
    row("&Eopf;", "\u{1d53c}"),
    row("&Epsilon;", "\u{395}"),
    row("&Equal;", "\u{2a75}"),
    row("&EqualTilde;", "\u{2242}"),
    row("&Equilibrium;", "\u{21cc}"),
    row("&Escr;", "\u{2130}"),
    row("&Esim;", "\u{2a73}"),
    row("&Eta;", "\u{397}"),
    row("&Euml", "\u{cb}"),
    row("&Euml;", "\u{cb}"),
    row("&Exists;", "\u{2203}"),
    row("&ExponentialE;", "\u{2147}"),
    row("&Fcy;", "\u{424}"),
    row("&Ffr;", "\u{1d509}"),
    row("&FilledSmallSquare;", "\u{25fc}"),
    row("&FilledVerySmallSquare;", "\u{25aa}"),
    row("&Fopf;", "\u{1d53d}"),
    row("&ForAll;", "\u{2200}"),
    row("&Fouriertrf;", "\u{2131}"),
    row("&Fscr;", "\u{2131}"),
    row("&GJcy;", "\u{403}"),
    row("&GT", ">"),
    row("&GT;", ">"),
    row("&Gamma;", "\u{393}"),
    row("&Gammad;", "\u{3dc}"),
    row("&Gbreve;", "\u{11e}"),
    row("&Gcedil;", "\u{122}"),
    row("&Gcirc;", "\u{11c}"),
    row("&Gcy;", "\u{413}"),
    row("&Gdot;", "\u{120}"),
    row("&Gfr;", "\u{1d50a}"),
    row("&Gg;", "\u{22d9}"),
    row("&Gopf;", "\u{1d53e}"),
    row("&GreaterEqual;", "\u{2265}"),
    row("&GreaterEqualLess;", "\u{22db}"),
    row("&GreaterFullEqual;", "\u{2267}"),
    row("&GreaterGreater;", "\u{2aa2}"),
    row("&GreaterLess;", "\u{2277}"),
    row("&GreaterSlantEqual;", "\u{2a7e}"),
    row("&GreaterTilde;", "\u{2273}"),
    row("&Gscr;", "\u{1d4a2}"),
    row("&Gt;", "\u{226b}"),
    row("&HARDcy;", "\u{42a}"),
    row("&Hacek;", "\u{2c7}"),
    row("&Hat;", "^"),
    row("&Hcirc;", "\u{124}"),
    row("&Hfr;", "\u{210c}"),
    row("&HilbertSpace;", "\u{210b}"),
    row("&Hopf;", "\u{210d}"),
    row("&HorizontalLine;", "\u{2500}"),
    row("&Hscr;", "\u{210b}"),
    row("&Hstrok;", "\u{126}"),
    row("&HumpDownHump;", "\u{224e}"),
    row("&HumpEqual;", "\u{224f}"),
    row("&IEcy;", "\u{415}"),
    row("&IJlig;", "\u{132}"),
    row("&IOcy;", "\u{401}"),
    row("&Iacute", "\u{cd}"),
    row("&Iacute;", "\u{cd}"),
    row("&Icirc", "\u{ce}"),
    row("&Icirc;", "\u{ce}"),
    row("&Icy;", "\u{418}"),
    row("&Idot;", "\u{130}"),
    row("&Ifr;", "\u{2111}"),
    row("&Igrave", "\u{cc}"),
    row("&Igrave;", "\u{cc}"),
    row("&Im;", "\u{2111}"),
    row("&Imacr;", "\u{12a}"),
    row("&ImaginaryI;", "\u{2148}"),
    row("&Implies;", "\u{21d2}"),
    row("&Int;", "\u{222c}"),
    row("&Integral;", "\u{222b}"),
    row("&Intersection;", "\u{22c2}"),
    row("&InvisibleComma;", "\u{2063}"),
    row("&InvisibleTimes;", "\u{2062}"),
    row("&Iogon;", "\u{12e}"),
    row("&Iopf;", "\u{1d540}"),
    row("&Iota;", "\u{399}"),
    row("&Iscr;", "\u{2110}"),
    row("&Itilde;", "\u{128}"),
    row("&Iukcy;", "\u{406}"),
    row("&Iuml", "\u{cf}"),
    row("&Iuml;", "\u{cf}"),
    row("&Jcirc;", "\u{134}"),
    row("&Jcy;", "\u{419}"),
    row("&Jfr;", "\u{1d50d}"),
    row("&Jopf;", "\u{1d541}"),
    row("&Jscr;", "\u{1d4a5}"),
    row("&Jsercy;", "\u{408}"),
    row("&Jukcy;", "\u{404}"),
    row("&KHcy;", "\u{425}"),
    row("&KJcy;", "\u{40c}"),
    row("&Kappa;", "\u{39a}"),
    row("&Kcedil;", "\u{136}"),
    row("&Kcy;", "\u{41a}"),
    row("&Kfr;", "\u{1d50e}"),
    row("&Kopf;", "\u{1d542}"),
    row("&Kscr;", "\u{1d4a6}"),
    row("&LJcy;", "\u{409}"),
    row("&LT", "<"),
    row("&LT;", "<"),
    row("&Lacute;", "\u{139}"),
    row("&Lambda;", "\u{39b}"),
    row("&Lang;", "\u{27ea}"),
    row("&Laplacetrf;", "\u{2112}"),
    row("&Larr;", "\u{219e}"),
    row("&Lcaron;", "\u{13d}"),
    row("&Lcedil;", "\u{13b}"),
    row("&Lcy;", "\u{41b}"),
    row("&LeftAngleBracket;", "\u{27e8}"),
    row("&LeftArrow;", "\u{2190}"),
    row("&LeftArrowBar;", "\u{21e4}"),
    row("&LeftArrowRightArrow;", "\u{21c6}"),
    row("&LeftCeiling;", "\u{2308}"),
    row("&LeftDoubleBracket;", "\u{27e6}"),
    row("&LeftDownTeeVector;", "\u{2961}"),
    row("&LeftDownVector;", "\u{21c3}"),
    row("&LeftDownVectorBar;", "\u{2959}"),
    row("&LeftFloor;", "\u{230a}"),
    row("&LeftRightArrow;", "\u{2194}"),
    row("&LeftRightVector;", "\u{294e}"),
    row("&LeftTee;", "\u{22a3}"),
    row("&LeftTeeArrow;", "\u{21a4}"),
    row("&LeftTeeVector;", "\u{295a}"),
    row("&LeftTriangle;", "\u{22b2}"),
    row("&LeftTriangleBar;", "\u{29cf}"),
    row("&LeftTriangleEqual;", "\u{22b4}"),
    row("&LeftUpDownVector;", "\u{2951}"),
    row("&LeftUpTeeVector;", "\u{2960}"),
    row("&LeftUpVector;", "\u{21bf}"),
    row("&LeftUpVectorBar;", "\u{2958}"),
    row("&LeftVector;", "\u{21bc}"),
    row("&LeftVectorBar;", "\u{2952}"),
    row("&Leftarrow;", "\u{21d0}"),
    row("&Leftrightarrow;", "\u{21d4}"),
    row("&LessEqualGreater;", "\u{22da}"),
    row("&LessFullEqual;", "\u{2266}"),
    row("&LessGreater;", "\u{2276}"),
    row("&LessLess;", "\u{2aa1}"),
    row("&LessSlantEqual;", "\u{2a7d}"),
    row("&LessTilde;", "\u{2272}"),
    row("&Lfr;", "\u{1d50f}"),
    row("&Ll;", "\u{22d8}"),
    row("&Lleftarrow;", "\u{21da}"),
    row("&Lmidot;", "\u{13f}"),
    row("&LongLeftArrow;", "\u{27f5}"),
    row("&LongLeftRightArrow;", "\u{27f7}"),
    row("&LongRightArrow;", "\u{27f6}"),
    row("&Longleftarrow;", "\u{27f8}"),
    row("&Longleftrightarrow;", "\u{27fa}"),
    row("&Longrightarrow;", "\u{27f9}"),
    row("&Lopf;", "\u{1d543}"),
    row("&LowerLeftArrow;", "\u{2199}"),
    row("&LowerRightArrow;", "\u{2198}"),
    row("&Lscr;", "\u{2112}"),
    row("&Lsh;", "\u{21b0}"),
    row("&Lstrok;", "\u{141}"),
    row("&Lt;", "\u{226a}"),
    row("&Map;", "\u{2905}"),
    row("&Mcy;", "\u{41c}"),
    row("&MediumSpace;", "\u{205f}"),
    row("&Mellintrf;", "\u{2133}"),
    row("&Mfr;", "\u{1d510}"),
    row("&MinusPlus;", "\u{2213}"),
    row("&Mopf;", "\u{1d544}"),
    row("&Mscr;", "\u{2133}"),
    row("&Mu;", "\u{39c}"),
    row("&NJcy;", "\u{40a}"),
    row("&Nacute;", "\u{143}"),
    row("&Ncaron;", "\u{147}"),
    row("&Ncedil;", "\u{145}"),
    row("&Ncy;", "\u{41d}"),
    row("&NegativeMediumSpace;", "\u{200b}"),
    row("&NegativeThickSpace;", "\u{200b}"),
    row("&NegativeThinSpace;", "\u{200b}"),
    row("&NegativeVeryThinSpace;", "\u{200b}"),
    row("&NestedGreaterGreater;", "\u{226b}"),
    row("&NestedLessLess;", "\u{226a}"),
    row("&NewLine;", "\u{a}"),
    row("&Nfr;", "\u{1d511}"),
    row("&NoBreak;", "\u{2060}"),
    row("&NonBreakingSpace;", "\u{a0}"),
    row("&Nopf;", "\u{2115}"),
    row("&Not;", "\u{2aec}"),
    row("&NotCongruent;", "\u{2262}"),
    row("&NotCupCap;", "\u{226d}"),
    row("&NotDoubleVerticalBar;", "\u{2226}"),
    row("&NotElement;", "\u{2209}"),
    row("&NotEqual;", "\u{2260}"),
    row("&NotEqualTilde;", "\u{2242}\u{338}"),
    row("&NotExists;", "\u{2204}"),
    row("&NotGreater;", "\u{226f}"),
    row("&NotGreaterEqual;", "\u{2271}"),
    row("&NotGreaterFullEqual;", "\u{2267}\u{338}"),
    row("&NotGreaterGreater;", "\u{226b}\u{338}"),
    row("&NotGreaterLess;", "\u{2279}"),
    row("&NotGreaterSlantEqual;", "\u{2a7e}\u{338}"),
    row("&NotGreaterTilde;", "\u{2275}"),
    row("&NotHumpDownHump;", "\u{224e}\u{338}"),
    row("&NotHumpEqual;", "\u{224f}\u{338}"),
    row("&NotLeftTriangle;", "\u{22ea}"),
    row("&NotLeftTriangleBar;", "\u{29cf}\u{338}"),
    row("&NotLeftTriangleEqual;", "\u{22ec}"),
    row("&NotLess;", "\u{226e}"),
    row("&NotLessEqual;", "\u{2270}"),
    row("&NotLessGreater;", "\u{2278}"),
    row("&NotLessLess;", "\u{226a}\u{338}"),
    row("&NotLessSlantEqual;", "\u{2a7d}\u{338}"),
    row("&NotLessTilde;", "\u{2274}"),
    row("&NotNestedGreaterGreater;", "\u{2aa2}\u{338}"),
    row("&NotNestedLessLess;", "\u{2aa1}\u{338}"),
    row("&NotPrecedes;", "\u{2280}"),
    row("&NotPrecedesEqual;", "\u{2aaf}\u{338}"),
    row("&NotPrecedesSlantEqual;", "\u{22e0}"),
    row("&NotReverseElement;", "\u{220c}"),
    row("&NotRightTriangle;", "\u{22eb}"),
    row("&NotRightTriangleBar;", "\u{29d0}\u{338}"),
    row("&NotRightTriangleEqual;", "\u{22ed}"),
    row("&NotSquareSubset;", "\u{228f}\u{338}"),
    row("&NotSquareSubsetEqual;", "\u{22e2}"),
    row("&NotSquareSuperset;", "\u{2290}\u{338}"),
    row("&NotSquareSupersetEqual;", "\u{22e3}"),
    row("&NotSubset;", "\u{2282}\u{20d2}"),
    row("&NotSubsetEqual;", "\u{2288}"),
    row("&NotSucceeds;", "\u{2281}"),
    row("&NotSucceedsEqual;", "\u{2ab0}\u{338}"),
    row("&NotSucceedsSlantEqual;", "\u{22e1}"),
    row("&NotSucceedsTilde;", "\u{227f}\u{338}"),
    row("&NotSuperset;", "\u{2283}\u{20d2}"),
    row("&NotSupersetEqual;", "\u{2289}"),
    row("&NotTilde;", "\u{2241}"),
    row("&NotTildeEqual;", "\u{2244}"),
    row("&NotTildeFullEqual;", "\u{2247}"),
    row("&NotTildeTilde;", "\u{2249}"),
    row("&NotVerticalBar;", "\u{2224}"),
    row("&Nscr;", "\u{1d4a9}"),
    row("&Ntilde", "\u{d1}"),
    row("&Ntilde;", "\u{d1}"),
    row("&Nu;", "\u{39d}"),
    row("&OElig;", "\u{152}"),
    row("&Oacute", "\u{d3}"),
    row("&Oacute;", "\u{d3}"),
    row("&Ocirc", "\u{d4}"),
    row("&Ocirc;", "\u{d4}"),
    row("&Ocy;", "\u{41e}"),
    row("&Odblac;", "\u{150}"),
    row("&Ofr;", "\u{1d512}"),
    row("&Ograve", "\u{d2}"),
    row("&Ograve;", "\u{d2}"),
    row("&Omacr;", "\u{14c}"),
    row("&Omega;", "\u{3a9}"),
    row("&Omicron;", "\u{39f}"),
    row("&Oopf;", "\u{1d546}"),
    row("&OpenCurlyDoubleQuote;", "\u{201c}"),
    row("&OpenCurlyQuote;", "\u{2018}"),
    row("&Or;", "\u{2a54}"),
    row("&Oscr;", "\u{1d4aa}"),
    row("&Oslash", "\u{d8}"),
    row("&Oslash;", "\u{d8}"),
    row("&Otilde", "\u{d5}"),
    row("&Otilde;", "\u{d5}"),
    row("&Otimes;", "\u{2a37}"),
    row("&Ouml", "\u{d6}"),
    row("&Ouml;", "\u{d6}"),
    row("&OverBar;", "\u{203e}"),
    row("&OverBrace;", "\u{23de}"),
    row("&OverBracket;", "\u{23b4}"),
    row("&OverParenthesis;", "\u{23dc}"),
    row("&PartialD;", "\u{2202}"),
    row("&Pcy;", "\u{41f}"),
    row("&Pfr;", "\u{1d513}"),
    row("&Phi;", "\u{3a6}"),
    row("&Pi;", "\u{3a0}"),
    row("&PlusMinus;", "\u{b1}"),
    row("&Poincareplane;", "\u{210c}"),
    row("&Popf;", "\u{2119}"),
    row("&Pr;", "\u{2abb}"),
    row("&Precedes;", "\u{227a}"),
    row("&PrecedesEqual;", "\u{2aaf}"),
    row("&PrecedesSlantEqual;", "\u{227c}"),
    row("&PrecedesTilde;", "\u{227e}"),
    row("&Prime;", "\u{2033}"),
    row("&Product;", "\u{220f}"),
    row("&Proportion;", "\u{2237}"),
    row("&Proportional;", "\u{221d}"),
    row("&Pscr;", "\u{1d4ab}"),
    row("&Psi;", "\u{3a8}"),
    row("&QUOT", "\""),
    row("&QUOT;", "\""),
    row("&Qfr;", "\u{1d514}"),
    row("&Qopf;", "\u{211a}"),
    row("&Qscr;", "\u{1d4ac}"),
    row("&RBarr;", "\u{2910}"),
    row("&REG", "\u{ae}"),
    row("&REG;", "\u{ae}"),
    row("&Racute;", "\u{154}"),
    row("&Rang;", "\u{27eb}"),
    row("&Rarr;", "\u{21a0}"),
    row("&Rarrtl;", "\u{2916}"),
    row("&Rcaron;", "\u{158}"),
    row("&Rcedil;", "\u{156}"),
    row("&Rcy;", "\u{420}"),
    row("&Re;", "\u{211c}"),
    row("&ReverseElement;", "\u{220b}"),
    row("&ReverseEquilibrium;", "\u{21cb}"),
    row("&ReverseUpEquilibrium;", "\u{296f}"),
    row("&Rfr;", "\u{211c}"),
    row("&Rho;", "\u{3a1}"),
    row("&RightAngleBracket;", "\u{27e9}"),
    row("&RightArrow;", "\u{2192}"),
    row("&RightArrowBar;", "\u{21e5}"),
    row("&RightArrowLeftArrow;", "\u{21c4}"),
    row("&RightCeiling;", "\u{2309}"),
    row("&RightDoubleBracket;", "\u{27e7}"),
    row("&RightDownTeeVector;", "\u{295d}"),
    row("&RightDownVector;", "\u{21c2}"),
    row("&RightDownVectorBar;", "\u{2955}"),
    row("&RightFloor;", "\u{230b}"),
    row("&RightTee;", "\u{22a2}"),
    row("&RightTeeArrow;", "\u{21a6}"),
    row("&RightTeeVector;", "\u{295b}"),
    row("&RightTriangle;", "\u{22b3}"),
    row("&RightTriangleBar;", "\u{29d0}"),
    row("&RightTriangleEqual;", "\u{22b5}"),
    row("&RightUpDownVector;", "\u{294f}"),
    row("&RightUpTeeVector;", "\u{295c}"),
    row("&RightUpVector;", "\u{21be}"),
    row("&RightUpVectorBar;", "\u{2954}"),
    row("&RightVector;", "\u{21c0}"),
    row("&RightVectorBar;", "\u{2953}"),
    row("&Rightarrow;", "\u{21d2}"),
    row("&Ropf;", "\u{211d}"),
    row("&RoundImplies;", "\u{2970}"),
    row("&Rrightarrow;", "\u{21db}"),
    row("&Rscr;", "\u{211b}"),
    row("&Rsh;", "\u{21b1}"),
    row("&RuleDelayed;", "\u{29f4}"),
    row("&SHCHcy;", "\u{429}"),
    row("&SHcy;", "\u{428}"),
    row("&SOFTcy;", "\u{42c}"),
    row("&Sacute;", "\u{15a}"),
    row("&Sc;", "\u{2abc}"),
    row("&Scaron;", "\u{160}"),
    row("&Scedil;", "\u{15e}"),
    row("&Scirc;", "\u{15c}"),
    row("&Scy;", "\u{421}"),
    row("&Sfr;", "\u{1d516}"),
    row("&ShortDownArrow;", "\u{2193}"),
    row("&ShortLeftArrow;", "\u{2190}"),
    row("&ShortRightArrow;", "\u{2192}"),
    row("&ShortUpArrow;", "\u{2191}"),
    row("&Sigma;", "\u{3a3}"),
    row("&SmallCircle;", "\u{2218}"),
    row("&Sopf;", "\u{1d54a}"),
    row("&Sqrt;", "\u{221a}"),
    row("&Square;", "\u{25a1}"),
    row("&SquareIntersection;", "\u{2293}"),
    row("&SquareSubset;", "\u{228f}"),
    row("&SquareSubsetEqual;", "\u{2291}"),
    row("&SquareSuperset;", "\u{2290}"),
    row("&SquareSupersetEqual;", "\u{2292}"),
    row("&SquareUnion;", "\u{2294}"),
    row("&Sscr;", "\u{1d4ae}"),
    row("&Star;", "\u{22c6}"),
    row("&Sub;", "\u{22d0}"),
    row("&Subset;", "\u{22d0}"),
    row("&SubsetEqual;", "\u{2286}"),
    row("&Succeeds;", "\u{227b}"),
    row("&SucceedsEqual;", "\u{2ab0}"),
    row("&SucceedsSlantEqual;", "\u{227d}"),
    row("&SucceedsTilde;", "\u{227f}"),
    row("&SuchThat;", "\u{220b}"),
    row("&Sum;", "\u{2211}"),
    row("&Sup;", "\u{22d1}"),
    row("&Superset;", "\u{2283}"),
    row("&SupersetEqual;", "\u{2287}"),
    row("&Supset;", "\u{22d1}"),
    row("&THORN", "\u{de}"),
    row("&THORN;", "\u{de}"),
    row("&TRADE;", "\u{2122}"),
    row("&TSHcy;", "\u{40b}"),
    row("&TScy;", "\u{426}"),
    row("&Tab;", "\u{9}"),
    row("&Tau;", "\u{3a4}"),
    row("&Tcaron;", "\u{164}"),
    row("&Tcedil;", "\u{162}"),
    row("&Tcy;", "\u{422}"),
    row("&Tfr;", "\u{1d517}"),
    row("&Therefore;", "\u{2234}"),
    row("&Theta;", "\u{398}"),
    row("&ThickSpace;", "\u{205f}\u{200a}"),
    row("&ThinSpace;", "\u{2009}"),
    row("&Tilde;", "\u{223c}"),
    row("&TildeEqual;", "\u{2243}"),
    row("&TildeFullEqual;", "\u{2245}"),
    row("&TildeTilde;", "\u{2248}"),
    row("&Topf;", "\u{1d54b}"),
    row("&TripleDot;", "\u{20db}"),
    row("&Tscr;", "\u{1d4af}"),
    row("&Tstrok;", "\u{166}"),
    row("&Uacute", "\u{da}"),
    row("&Uacute;", "\u{da}"),
    row("&Uarr;", "\u{219f}"),
    row("&Uarrocir;", "\u{2949}"),
    row("&Ubrcy;", "\u{40e}"),
    row("&Ubreve;", "\u{16c}"),
    row("&Ucirc", "\u{db}"),
    row("&Ucirc;", "\u{db}"),
    row("&Ucy;", "\u{423}"),
    row("&Udblac;", "\u{170}"),
    row("&Ufr;", "\u{1d518}"),
    row("&Ugrave", "\u{d9}"),
    row("&Ugrave;", "\u{d9}"),
    row("&Umacr;", "\u{16a}"),
    row("&UnderBar;", "_"),
    row("&UnderBrace;", "\u{23df}"),
    row("&UnderBracket;", "\u{23b5}"),
    row("&UnderParenthesis;", "\u{23dd}"),
    row("&Union;", "\u{22c3}"),
    row("&UnionPlus;", "\u{228e}"),
    row("&Uogon;", "\u{172}"),
    row("&Uopf;", "\u{1d54c}"),
    row("&UpArrow;", "\u{2191}"),
    row("&UpArrowBar;", "\u{2912}"),
    row("&UpArrowDownArrow;", "\u{21c5}"),
    row("&UpDownArrow;", "\u{2195}"),
    row("&UpEquilibrium;", "\u{296e}"),
    row("&UpTee;", "\u{22a5}"),
    row("&UpTeeArrow;", "\u{21a5}"),
    row("&Uparrow;", "\u{21d1}"),
    row("&Updownarrow;", "\u{21d5}"),
    row("&UpperLeftArrow;", "\u{2196}"),
    row("&UpperRightArrow;", "\u{2197}"),
    row("&Upsi;", "\u{3d2}"),
    row("&Upsilon;", "\u{3a5}"),
    row("&Uring;", "\u{16e}"),
    row("&Uscr;", "\u{1d4b0}"),
    row("&Utilde;", "\u{168}"),
    row("&Uuml", "\u{dc}"),
    row("&Uuml;", "\u{dc}"),
    row("&VDash;", "\u{22ab}"),
    row("&Vbar;", "\u{2aeb}"),
    row("&Vcy;", "\u{412}"),
    row("&Vdash;", "\u{22a9}"),
    row("&Vdashl;", "\u{2ae6}"),
    row("&Vee;", "\u{22c1}"),
    row("&Verbar;", "\u{2016}"),
    row("&Vert;", "\u{2016}"),
    row("&VerticalBar;", "\u{2223}"),
    row("&VerticalLine;", "|"),
    row("&VerticalSeparator;", "\u{2758}"),
    row("&VerticalTilde;", "\u{2240}"),
    row("&VeryThinSpace;", "\u{200a}"),
    row("&Vfr;", "\u{1d519}"),
    row("&Vopf;", "\u{1d54d}"),
    row("&Vscr;", "\u{1d4b1}"),
    row("&Vvdash;", "\u{22aa}"),
    row("&Wcirc;", "\u{174}"),
    row("&Wedge;", "\u{22c0}"),
    row("&Wfr;", "\u{1d51a}"),
    row("&Wopf;", "\u{1d54e}"),
    row("&Wscr;", "\u{1d4b2}"),
    row("&Xfr;", "\u{1d51b}"),
    row("&Xi;", "\u{39e}"),
    row("&Xopf;", "\u{1d54f}"),
    row("&Xscr;", "\u{1d4b3}"),
    row("&YAcy;", "\u{42f}"),
    row("&YIcy;", "\u{407}"),
    row("&YUcy;", "\u{42e}"),
    row("&Yacute", "\u{dd}"),
    row("&Yacute;", "\u{dd}"),
    row("&Ycirc;", "\u{176}"),
    row("&Ycy;", "\u{42b}"),
    row("&Yfr;", "\u{1d51c}"),
    row("&Yopf;", "\u{1d550}"),
    row("&Yscr;", "\u{1d4b4}"),
    row("&Yuml;", "\u{178}"),
    row("&ZHcy;", "\u{416}"),
    row("&Zacute;", "\u{179}"),
    row("&Zcaron;", "\u{17d}"),
    row("&Zcy;", "\u{417}"),
    row("&Zdot;", "\u{17b}"),
    row("&ZeroWidthSpace;", "\u{200b}"),
    row("&Zeta;", "\u{396}"),
    row("&Zfr;", "\u{2128}"),
    row("&Zopf;", "\u{2124}"),
    row("&Zscr;", "\u{1d4b5}"),
    row("&aacute", "\u{e1}"),
    row("&aacute;", "\u{e1}"),
    row("&abreve;", "\u{103}"),
    row("&ac;", "\u{223e}"),
    row("&acE;", "\u{223e}\u{333}"),
    row("&acd;", "\u{223f}"),
    row("&acirc", "\u{e2}"),
    row("&acirc;", "\u{e2}"),
    row("&acute", "\u{b4}"),
    row("&acute;", "\u{b4}"),
    row("&acy;", "\u{430}"),
    row("&aelig", "\u{e6}"),
    row("&aelig;", "\u{e6}"),
    row("&af;", "\u{2061}"),
    row("&afr;", "\u{1d51e}"),
    row("&agrave", "\u{e0}"),
    row("&agrave;", "\u{e0}"),
    row("&alefsym;", "\u{2135}"),
    row("&aleph;", "\u{2135}"),
    row("&alpha;", "\u{3b1}"),
    row("&amacr;", "\u{101}"),
    row("&amalg;", "\u{2a3f}"),
    row("&amp", "&"),
    row("&amp;", "&"),
    row("&and;", "\u{2227}"),
    row("&andand;", "\u{2a55}"),
    row("&andd;", "\u{2a5c}"),
    row("&andslope;", "\u{2a58}"),
    row("&andv;", "\u{2a5a}"),
    row("&ang;", "\u{2220}"),
    row("&ange;", "\u{29a4}"),
    row("&angle;", "\u{2220}"),
    row("&angmsd;", "\u{2221}"),
    row("&angmsdaa;", "\u{29a8}"),
    row("&angmsdab;", "\u{29a9}"),
    row("&angmsdac;", "\u{29aa}"),
    row("&angmsdad;", "\u{29ab}"),
    row("&angmsdae;", "\u{29ac}"),
    row("&angmsdaf;", "\u{29ad}"),
    row("&angmsdag;", "\u{29ae}"),
    row("&angmsdah;", "\u{29af}"),
    row("&angrt;", "\u{221f}"),
    row("&angrtvb;", "\u{22be}"),
    row("&angrtvbd;", "\u{299d}"),
    row("&angsph;", "\u{2222}"),
    row("&angst;", "\u{c5}"),
    row("&angzarr;", "\u{237c}"),
    row("&aogon;", "\u{105}"),
    row("&aopf;", "\u{1d552}"),
    row("&ap;", "\u{2248}"),
    row("&apE;", "\u{2a70}"),
    row("&apacir;", "\u{2a6f}"),
    row("&ape;", "\u{224a}"),
    row("&apid;", "\u{224b}"),
    row("&apos;", "'"),
    row("&approx;", "\u{2248}"),
    row("&approxeq;", "\u{224a}"),
    row("&aring", "\u{e5}"),
    row("&aring;", "\u{e5}"),
    row("&ascr;", "\u{1d4b6}"),
    row("&ast;", "*"),
    row("&asymp;", "\u{2248}"),
    row("&asympeq;", "\u{224d}"),
    row("&atilde", "\u{e3}"),
    row("&atilde;", "\u{e3}"),
    row("&auml", "\u{e4}"),
    row("&auml;", "\u{e4}"),
    row("&awconint;", "\u{2233}"),
    row("&awint;", "\u{2a11}"),
    row("&bNot;", "\u{2aed}"),
    row("&backcong;", "\u{224c}"),
    row("&backepsilon;", "\u{3f6}"),
    row("&backprime;", "\u{2035}"),
    row("&backsim;", "\u{223d}"),
    row("&backsimeq;", "\u{22cd}"),
    row("&barvee;", "\u{22bd}"),
    row("&barwed;", "\u{2305}"),
    row("&barwedge;", "\u{2305}"),
    row("&bbrk;", "\u{23b5}"),
    row("&bbrktbrk;", "\u{23b6}"),
    row("&bcong;", "\u{224c}"),
    row("&bcy;", "\u{431}"),
    row("&bdquo;", "\u{201e}"),
    row("&becaus;", "\u{2235}"),
    row("&because;", "\u{2235}"),
    row("&bemptyv;", "\u{29b0}"),
    row("&bepsi;", "\u{3f6}"),
    row("&bernou;", "\u{212c}"),
    row("&beta;", "\u{3b2}"),
    row("&beth;", "\u{2136}"),
    row("&between;", "\u{226c}"),
    row("&bfr;", "\u{1d51f}"),
    row("&bigcap;", "\u{22c2}"),
    row("&bigcirc;", "\u{25ef}"),
    row("&bigcup;", "\u{22c3}"),
    row("&bigodot;", "\u{2a00}"),
    row("&bigoplus;", "\u{2a01}"),
    row("&bigotimes;", "\u{2a02}"),
    row("&bigsqcup;", "\u{2a06}"),
    row("&bigstar;", "\u{2605}"),
    row("&bigtriangledown;", "\u{25bd}"),
    row("&bigtriangleup;", "\u{25b3}"),
    row("&biguplus;", "\u{2a04}"),
    row("&bigvee;", "\u{22c1}"),
    row("&bigwedge;", "\u{22c0}"),
    row("&bkarow;", "\u{290d}"),
    row("&blacklozenge;", "\u{29eb}"),
    row("&blacksquare;", "\u{25aa}"),
    row("&blacktriangle;", "\u{25b4}"),
    row("&blacktriangledown;", "\u{25be}"),
    row("&blacktriangleleft;", "\u{25c2}"),
    row("&blacktriangleright;", "\u{25b8}"),
    row("&blank;", "\u{2423}"),
    row("&blk12;", "\u{2592}"),
    row("&blk14;", "\u{2591}"),
    row("&blk34;", "\u{2593}"),
    row("&block;", "\u{2588}"),
    row("&bne;", "=\u{20e5}"),
    row("&bnequiv;", "\u{2261}\u{20e5}"),
    row("&bnot;", "\u{2310}"),
    row("&bopf;", "\u{1d553}"),
    row("&bot;", "\u{22a5}"),
    row("&bottom;", "\u{22a5}"),
    row("&bowtie;", "\u{22c8}"),
    row("&boxDL;", "\u{2557}"),
    row("&boxDR;", "\u{2554}"),
    row("&boxDl;", "\u{2556}"),
    row("&boxDr;", "\u{2553}"),
    row("&boxH;", "\u{2550}"),
    row("&boxHD;", "\u{2566}"),
    row("&boxHU;", "\u{2569}"),
    row("&boxHd;", "\u{2564}"),
    row("&boxHu;", "\u{2567}"),
    row("&boxUL;", "\u{255d}"),
    row("&boxUR;", "\u{255a}"),
    row("&boxUl;", "\u{255c}"),
    row("&boxUr;", "\u{2559}"),
    row("&boxV;", "\u{2551}"),
    row("&boxVH;", "\u{256c}"),
    row("&boxVL;", "\u{2563}"),
    row("&boxVR;", "\u{2560}"),
    row("&boxVh;", "\u{256b}"),
    row("&boxVl;", "\u{2562}"),
    row("&boxVr;", "\u{255f}"),
    row("&boxbox;", "\u{29c9}"),
    row("&boxdL;", "\u{2555}"),
    row("&boxdR;", "\u{2552}"),
    row("&boxdl;", "\u{2510}"),
    row("&boxdr;", "\u{250c}"),
    row("&boxh;", "\u{2500}"),
    row("&boxhD;", "\u{2565}"),
    row("&boxhU;", "\u{2568}"),
    row("&boxhd;", "\u{252c}"),
    row("&boxhu;", "\u{2534}"),
    row("&boxminus;", "\u{229f}"),
    row("&boxplus;", "\u{229e}"),
    row("&boxtimes;", "\u{22a0}"),
    row("&boxuL;", "\u{255b}"),
    row("&boxuR;", "\u{2558}"),
    row("&boxul;", "\u{2518}"),
    row("&boxur;", "\u{2514}"),
    row("&boxv;", "\u{2502}"),
    row("&boxvH;", "\u{256a}"),
    row("&boxvL;", "\u{2561}"),
    row("&boxvR;", "\u{255e}"),
    row("&boxvh;", "\u{253c}"),
    row("&boxvl;", "\u{2524}"),
    row("&boxvr;", "\u{251c}"),
    row("&bprime;", "\u{2035}"),
    row("&breve;", "\u{2d8}"),
    row("&brvbar", "\u{a6}"),
    row("&brvbar;", "\u{a6}"),
    row("&bscr;", "\u{1d4b7}"),
    row("&bsemi;", "\u{204f}"),
    row("&bsim;", "\u{223d}"),
    row("&bsime;", "\u{22cd}"),
    row("&bsol;", "\\"),
    row("&bsolb;", "\u{29c5}"),
    row("&bsolhsub;", "\u{27c8}"),
    row("&bull;", "\u{2022}"),
    row("&bullet;", "\u{2022}"),
    row("&bump;", "\u{224e}"),
    row("&bumpE;", "\u{2aae}"),
    row("&bumpe;", "\u{224f}"),
    row("&bumpeq;", "\u{224f}"),
    row("&cacute;", "\u{107}"),
    row("&cap;", "\u{2229}"),
    row("&capand;", "\u{2a44}"),
    row("&capbrcup;", "\u{2a49}"),
    row("&capcap;", "\u{2a4b}"),
    row("&capcup;", "\u{2a47}"),
    row("&capdot;", "\u{2a40}"),
    row("&caps;", "\u{2229}\u{fe00}"),
    row("&caret;", "\u{2041}"),
    row("&caron;", "\u{2c7}"),
    row("&ccaps;", "\u{2a4d}"),
    row("&ccaron;", "\u{10d}"),
    row("&ccedil", "\u{e7}"),
    row("&ccedil;", "\u{e7}"),
    row("&ccirc;", "\u{109}"),
    row("&ccups;", "\u{2a4c}"),
    row("&ccupssm;", "\u{2a50}"),
    row("&cdot;", "\u{10b}"),
    row("&cedil", "\u{b8}"),
    row("&cedil;", "\u{b8}"),
    row("&cemptyv;", "\u{29b2}"),
    row("&cent", "\u{a2}"),
    row("&cent;", "\u{a2}"),
    row("&centerdot;", "\u{b7}"),
    row("&cfr;", "\u{1d520}"),
    row("&chcy;", "\u{447}"),
    row("&check;", "\u{2713}"),
    row("&checkmark;", "\u{2713}"),
    row("&chi;", "\u{3c7}"),
    row("&cir;", "\u{25cb}"),
    row("&cirE;", "\u{29c3}"),
    row("&circ;", "\u{2c6}"),
    row("&circeq;", "\u{2257}"),
    row("&circlearrowleft;", "\u{21ba}"),
    row("&circlearrowright;", "\u{21bb}"),
    row("&circledR;", "\u{ae}"),
    row("&circledS;", "\u{24c8}"),
    row("&circledast;", "\u{229b}"),
    row("&circledcirc;", "\u{229a}"),
    row("&circleddash;", "\u{229d}"),
    row("&cire;", "\u{2257}"),
    row("&cirfnint;", "\u{2a10}"),
    row("&cirmid;", "\u{2aef}"),
    row("&cirscir;", "\u{29c2}"),
    row("&clubs;", "\u{2663}"),
    row("&clubsuit;", "\u{2663}"),
    row("&colon;", ":"),
    row("&colone;", "\u{2254}"),
    row("&coloneq;", "\u{2254}"),
    row("&comma;", ","),
    row("&commat;", "@"),
    row("&comp;", "\u{2201}"),
    row("&compfn;", "\u{2218}"),
    row("&complement;", "\u{2201}"),
    row("&complexes;", "\u{2102}"),
    row("&cong;", "\u{2245}"),
    row("&congdot;", "\u{2a6d}"),
    row("&conint;", "\u{222e}"),
    row("&copf;", "\u{1d554}"),
    row("&coprod;", "\u{2210}"),
    row("&copy", "\u{a9}"),
    row("&copy;", "\u{a9}"),
    row("&copysr;", "\u{2117}"),
    row("&crarr;", "\u{21b5}"),
    row("&cross;", "\u{2717}"),
    row("&cscr;", "\u{1d4b8}"),
    row("&csub;", "\u{2acf}"),
    row("&csube;", "\u{2ad1}"),
    row("&csup;", "\u{2ad0}"),
    row("&csupe;", "\u{2ad2}"),
    row("&ctdot;", "\u{22ef}"),
    row("&cudarrl;", "\u{2938}"),
    row("&cudarrr;", "\u{2935}"),
    row("&cuepr;", "\u{22de}"),
    row("&cuesc;", "\u{22df}"),
    row("&cularr;", "\u{21b6}"),
    row("&cularrp;", "\u{293d}"),
    row("&cup;", "\u{222a}"),
    row("&cupbrcap;", "\u{2a48}"),
    row("&cupcap;", "\u{2a46}"),
    row("&cupcup;", "\u{2a4a}"),
    row("&cupdot;", "\u{228d}"),
    row("&cupor;", "\u{2a45}"),
    row("&cups;", "\u{222a}\u{fe00}"),
    row("&curarr;", "\u{21b7}"),
    row("&curarrm;", "\u{293c}"),
    row("&curlyeqprec;", "\u{22de}"),
    row("&curlyeqsucc;", "\u{22df}"),
    row("&curlyvee;", "\u{22ce}"),
    row("&curlywedge;", "\u{22cf}"),
    row("&curren", "\u{a4}"),
    row("&curren;", "\u{a4}"),
    row("&curvearrowleft;", "\u{21b6}"),
    row("&curvearrowright;", "\u{21b7}"),
    row("&cuvee;", "\u{22ce}"),
    row("&cuwed;", "\u{22cf}"),
    row("&cwconint;", "\u{2232}"),
    row("&cwint;", "\u{2231}"),
    row("&cylcty;", "\u{232d}"),
    row("&dArr;", "\u{21d3}"),
    row("&dHar;", "\u{2965}"),
    row("&dagger;", "\u{2020}"),
    row("&daleth;", "\u{2138}"),
    row("&darr;", "\u{2193}"),
    row("&dash;", "\u{2010}"),
    row("&dashv;", "\u{22a3}"),
    row("&dbkarow;", "\u{290f}"),
    row("&dblac;", "\u{2dd}"),
    row("&dcaron;", "\u{10f}"),
    row("&dcy;", "\u{434}"),
    row("&dd;", "\u{2146}"),
    row("&ddagger;", "\u{2021}"),
    row("&ddarr;", "\u{21ca}"),
    row("&ddotseq;", "\u{2a77}"),
    row("&deg", "\u{b0}"),
    row("&deg;", "\u{b0}"),
    row("&delta;", "\u{3b4}"),
    row("&demptyv;", "\u{29b1}"),
    row("&dfisht;", "\u{297f}"),
    row("&dfr;", "\u{1d521}"),
    row("&dharl;", "\u{21c3}"),
    row("&dharr;", "\u{21c2}"),
    row("&diam;", "\u{22c4}"),
    row("&diamond;", "\u{22c4}"),
    row("&diamondsuit;", "\u{2666}"),
    row("&diams;", "\u{2666}"),
    row("&die;", "\u{a8}"),
    row("&digamma;", "\u{3dd}"),
    row("&disin;", "\u{22f2}"),
    row("&div;", "\u{f7}"),
    row("&divide", "\u{f7}"),
    row("&divide;", "\u{f7}"),
    row("&divideontimes;", "\u{22c7}"),
    row("&divonx;", "\u{22c7}"),
    row("&djcy;", "\u{452}"),
    row("&dlcorn;", "\u{231e}"),
    row("&dlcrop;", "\u{230d}"),
    row("&dollar;", "$"),
    row("&dopf;", "\u{1d555}"),
    row("&dot;", "\u{2d9}"),
    row("&doteq;", "\u{2250}"),
    row("&doteqdot;", "\u{2251}"),
    row("&dotminus;", "\u{2238}"),
    row("&dotplus;", "\u{2214}"),
    row("&dotsquare;", "\u{22a1}"),
    row("&doublebarwedge;", "\u{2306}"),
    row("&downarrow;", "\u{2193}"),
    row("&downdownarrows;", "\u{21ca}"),
    row("&downharpoonleft;", "\u{21c3}"),
    row("&downharpoonright;", "\u{21c2}"),
    row("&drbkarow;", "\u{2910}"),
    row("&drcorn;", "\u{231f}"),
    row("&drcrop;", "\u{230c}"),
    row("&dscr;", "\u{1d4b9}"),
    row("&dscy;", "\u{455}"),
    row("&dsol;", "\u{29f6}"),
    row("&dstrok;", "\u{111}"),
    row("&dtdot;", "\u{22f1}"),
    row("&dtri;", "\u{25bf}"),
    row("&dtrif;", "\u{25be}"),
    row("&duarr;", "\u{21f5}"),
    row("&duhar;", "\u{296f}"),
    row("&dwangle;", "\u{29a6}"),
    row("&dzcy;", "\u{45f}"),
    row("&dzigrarr;", "\u{27ff}"),
    row("&eDDot;", "\u{2a77}"),
    row("&eDot;", "\u{2251}"),
    row("&eacute", "\u{e9}"),
    row("&eacute;", "\u{e9}"),
    row("&easter;", "\u{2a6e}"),
    row("&ecaron;", "\u{11b}"),
    row("&ecir;", "\u{2256}"),
    row("&ecirc", "\u{ea}"),
    row("&ecirc;", "\u{ea}"),
    row("&ecolon;", "\u{2255}"),
    row("&ecy;", "\u{44d}"),
    row("&edot;", "\u{117}"),
    row("&ee;", "\u{2147}"),
    row("&efDot;", "\u{2252}"),
    row("&efr;", "\u{1d522}"),
    row("&eg;", "\u{2a9a}"),
    row("&egrave", "\u{e8}"),
    row("&egrave;", "\u{e8}"),
    row("&egs;", "\u{2a96}"),
    row("&egsdot;", "\u{2a98}"),
    row("&el;", "\u{2a99}"),
    row("&elinters;", "\u{23e7}"),
    row("&ell;", "\u{2113}"),
    row("&els;", "\u{2a95}"),
    row("&elsdot;", "\u{2a97}"),
    row("&emacr;", "\u{113}"),
    row("&empty;", "\u{2205}"),
    row("&emptyset;", "\u{2205}"),
    row("&emptyv;", "\u{2205}"),
    row("&emsp13;", "\u{2004}"),
    row("&emsp14;", "\u{2005}"),
    row("&emsp;", "\u{2003}"),
    row("&eng;", "\u{14b}"),
    row("&ensp;", "\u{2002}"),
    row("&eogon;", "\u{119}"),
    row("&eopf;", "\u{1d556}"),
    row("&epar;", "\u{22d5}"),
    row("&eparsl;", "\u{29e3}"),
    row("&eplus;", "\u{2a71}"),
    row("&epsi;", "\u{3b5}"),
    row("&epsilon;", "\u{3b5}"),
    row("&epsiv;", "\u{3f5}"),
    row("&eqcirc;", "\u{2256}"),
    row("&eqcolon;", "\u{2255}"),
    row("&eqsim;", "\u{2242}"),
    row("&eqslantgtr;", "\u{2a96}"),
    row("&eqslantless;", "\u{2a95}"),
    row("&equals;", "="),
    row("&equest;", "\u{225f}"),
    row("&equiv;", "\u{2261}"),
    row("&equivDD;", "\u{2a78}"),
    row("&eqvparsl;", "\u{29e5}"),
    row("&erDot;", "\u{2253}"),
    row("&erarr;", "\u{2971}"),
    row("&escr;", "\u{212f}"),
    row("&esdot;", "\u{2250}"),
    row("&esim;", "\u{2242}"),
    row("&eta;", "\u{3b7}"),
    row("&eth", "\u{f0}"),
    row("&eth;", "\u{f0}"),
    row("&euml", "\u{eb}"),
    row("&euml;", "\u{eb}"),
    row("&euro;", "\u{20ac}"),
    row("&excl;", "!"),
    row("&exist;", "\u{2203}"),
    row("&expectation;", "\u{2130}"),
    row("&exponentiale;", "\u{2147}"),
    row("&fallingdotseq;", "\u{2252}"),
    row("&fcy;", "\u{444}"),
    row("&female;", "\u{2640}"),
    row("&ffilig;", "\u{fb03}"),
    row("&fflig;", "\u{fb00}"),
    row("&ffllig;", "\u{fb04}"),
    row("&ffr;", "\u{1d523}"),
    row("&filig;", "\u{fb01}"),
    row("&fjlig;", "fj"),
    row("&flat;", "\u{266d}"),
    row("&fllig;", "\u{fb02}"),
    row("&fltns;", "\u{25b1}"),
    row("&fnof;", "\u{192}"),
    row("&fopf;", "\u{1d557}"),
    row("&forall;", "\u{2200}"),
    row("&fork;", "\u{22d4}"),
    row("&forkv;", "\u{2ad9}"),
    row("&fpartint;", "\u{2a0d}"),
    row("&frac12", "\u{bd}"),
    row("&frac12;", "\u{bd}"),
    row("&frac13;", "\u{2153}"),
    row("&frac14", "\u{bc}"),
    row("&frac14;", "\u{bc}"),
    row("&frac15;", "\u{2155}"),
    row("&frac16;", "\u{2159}"),
    row("&frac18;", "\u{215b}"),
    row("&frac23;", "\u{2154}"),
    row("&frac25;", "\u{2156}"),
    row("&frac34", "\u{be}"),
    row("&frac34;", "\u{be}"),
    row("&frac35;", "\u{2157}"),
    row("&frac38;", "\u{215c}"),
    row("&frac45;", "\u{2158}"),
    row("&frac56;", "\u{215a}"),
    row("&frac58;", "\u{215d}"),
    row("&frac78;", "\u{215e}"),
    row("&frasl;", "\u{2044}"),
    row("&frown;", "\u{2322}"),
    row("&fscr;", "\u{1d4bb}"),
    row("&gE;", "\u{2267}"),
    row("&gEl;", "\u{2a8c}"),
    row("&gacute;", "\u{1f5}"),
    row("&gamma;", "\u{3b3}"),
    row("&gammad;", "\u{3dd}"),
    row("&gap;", "\u{2a86}"),
    row("&gbreve;", "\u{11f}"),
    row("&gcirc;", "\u{11d}"),
    row("&gcy;", "\u{433}"),
    row("&gdot;", "\u{121}"),
    row("&ge;", "\u{2265}"),
    row("&gel;", "\u{22db}"),
    row("&geq;", "\u{2265}"),
    row("&geqq;", "\u{2267}"),
    row("&geqslant;", "\u{2a7e}"),
    row("&ges;", "\u{2a7e}"),
    row("&gescc;", "\u{2aa9}"),
    row("&gesdot;", "\u{2a80}"),
    row("&gesdoto;", "\u{2a82}"),
    row("&gesdotol;", "\u{2a84}"),
    row("&gesl;", "\u{22db}\u{fe00}"),
    row("&gesles;", "\u{2a94}"),
    row("&gfr;", "\u{1d524}"),
    row("&gg;", "\u{226b}"),
    row("&ggg;", "\u{22d9}"),
    row("&gimel;", "\u{2137}"),
    row("&gjcy;", "\u{453}"),
    row("&gl;", "\u{2277}"),
    row("&glE;", "\u{2a92}"),
    row("&gla;", "\u{2aa5}"),
    row("&glj;", "\u{2aa4}"),
    row("&gnE;", "\u{2269}"),
    row("&gnap;", "\u{2a8a}"),
    row("&gnapprox;", "\u{2a8a}"),
    row("&gne;", "\u{2a88}"),
    row("&gneq;", "\u{2a88}"),
    row("&gneqq;", "\u{2269}"),
    row("&gnsim;", "\u{22e7}"),
    row("&gopf;", "\u{1d558}"),
    row("&grave;", "`"),
    row("&gscr;", "\u{210a}"),
    row("&gsim;", "\u{2273}"),
    row("&gsime;", "\u{2a8e}"),
    row("&gsiml;", "\u{2a90}"),
    row("&gt", ">"),
    row("&gt;", ">"),
    row("&gtcc;", "\u{2aa7}"),
    row("&gtcir;", "\u{2a7a}"),
    row("&gtdot;", "\u{22d7}"),
    row("&gtlPar;", "\u{2995}"),
    row("&gtquest;", "\u{2a7c}"),
    row("&gtrapprox;", "\u{2a86}"),
    row("&gtrarr;", "\u{2978}"),
    row("&gtrdot;", "\u{22d7}"),
    row("&gtreqless;", "\u{22db}"),
    row("&gtreqqless;", "\u{2a8c}"),
    row("&gtrless;", "\u{2277}"),
    row("&gtrsim;", "\u{2273}"),
    row("&gvertneqq;", "\u{2269}\u{fe00}"),
    row("&gvnE;", "\u{2269}\u{fe00}"),
    row("&hArr;", "\u{21d4}"),
    row("&hairsp;", "\u{200a}"),
    row("&half;", "\u{bd}"),
    row("&hamilt;", "\u{210b}"),
    row("&hardcy;", "\u{44a}"),
    row("&harr;", "\u{2194}"),
    row("&harrcir;", "\u{2948}"),
    row("&harrw;", "\u{21ad}"),
    row("&hbar;", "\u{210f}"),
    row("&hcirc;", "\u{125}"),
    row("&hearts;", "\u{2665}"),
    row("&heartsuit;", "\u{2665}"),
    row("&hellip;", "\u{2026}"),
    row("&hercon;", "\u{22b9}"),
    row("&hfr;", "\u{1d525}"),
    row("&hksearow;", "\u{2925}"),
    row("&hkswarow;", "\u{2926}"),
    row("&hoarr;", "\u{21ff}"),
    row("&homtht;", "\u{223b}"),
    row("&hookleftarrow;", "\u{21a9}"),
    row("&hookrightarrow;", "\u{21aa}"),
    row("&hopf;", "\u{1d559}"),
    row("&horbar;", "\u{2015}"),
    row("&hscr;", "\u{1d4bd}"),
    row("&hslash;", "\u{210f}"),
    row("&hstrok;", "\u{127}"),
    row("&hybull;", "\u{2043}"),
    row("&hyphen;", "\u{2010}"),
    row("&iacute", "\u{ed}"),
    row("&iacute;", "\u{ed}"),
    row("&ic;", "\u{2063}"),
    row("&icirc", "\u{ee}"),
    row("&icirc;", "\u{ee}"),
    row("&icy;", "\u{438}"),
    row("&iecy;", "\u{435}"),
    row("&iexcl", "\u{a1}"),
    row("&iexcl;", "\u{a1}"),
    row("&iff;", "\u{21d4}"),
    row("&ifr;", "\u{1d526}"),
    row("&igrave", "\u{ec}"),
    row("&igrave;", "\u{ec}"),
    row("&ii;", "\u{2148}"),
    row("&iiiint;", "\u{2a0c}"),
    row("&iiint;", "\u{222d}"),
    row("&iinfin;", "\u{29dc}"),
    row("&iiota;", "\u{2129}"),
    row("&ijlig;", "\u{133}"),
    row("&imacr;", "\u{12b}"),
    row("&image;", "\u{2111}"),
    row("&imagline;", "\u{2110}"),
    row("&imagpart;", "\u{2111}"),
    row("&imath;", "\u{131}"),
    row("&imof;", "\u{22b7}"),
    row("&imped;", "\u{1b5}"),
    row("&in;", "\u{2208}"),
    row("&incare;", "\u{2105}"),
    row("&infin;", "\u{221e}"),
    row("&infintie;", "\u{29dd}"),
    row("&inodot;", "\u{131}"),
    row("&int;", "\u{222b}"),
    row("&intcal;", "\u{22ba}"),
    row("&integers;", "\u{2124}"),
    row("&intercal;", "\u{22ba}"),
    row("&intlarhk;", "\u{2a17}"),
    row("&intprod;", "\u{2a3c}"),
    row("&iocy;", "\u{451}"),
    row("&iogon;", "\u{12f}"),
    row("&iopf;", "\u{1d55a}"),
    row("&iota;", "\u{3b9}"),
    row("&iprod;", "\u{2a3c}"),
    row("&iquest", "\u{bf}"),
    row("&iquest;", "\u{bf}"),
    row("&iscr;", "\u{1d4be}"),
    row("&isin;", "\u{2208}"),
    row("&isinE;", "\u{22f9}"),
    row("&isindot;", "\u{22f5}"),
    row("&isins;", "\u{22f4}"),
    row("&isinsv;", "\u{22f3}"),
    row("&isinv;", "\u{2208}"),
    row("&it;", "\u{2062}"),
    row("&itilde;", "\u{129}"),
    row("&iukcy;", "\u{456}"),
    row("&iuml", "\u{ef}"),
    row("&iuml;", "\u{ef}"),
    row("&jcirc;", "\u{135}"),
    row("&jcy;", "\u{439}"),
    row("&jfr;", "\u{1d527}"),
    row("&jmath;", "\u{237}"),
    row("&jopf;", "\u{1d55b}"),
    row("&jscr;", "\u{1d4bf}"),
    row("&jsercy;", "\u{458}"),
    row("&jukcy;", "\u{454}"),
    row("&kappa;", "\u{3ba}"),
    row("&kappav;", "\u{3f0}"),
    row("&kcedil;", "\u{137}"),
    row("&kcy;", "\u{43a}"),
    row("&kfr;", "\u{1d528}"),
    row("&kgreen;", "\u{138}"),
    row("&khcy;", "\u{445}"),
    row("&kjcy;", "\u{45c}"),
    row("&kopf;", "\u{1d55c}"),
    row("&kscr;", "\u{1d4c0}"),
    row("&lAarr;", "\u{21da}"),
    row("&lArr;", "\u{21d0}"),
    row("&lAtail;", "\u{291b}"),
    row("&lBarr;", "\u{290e}"),
    row("&lE;", "\u{2266}"),
    row("&lEg;", "\u{2a8b}"),
    row("&lHar;", "\u{2962}"),
    row("&lacute;", "\u{13a}"),
    row("&laemptyv;", "\u{29b4}"),
    row("&lagran;", "\u{2112}"),
    row("&lambda;", "\u{3bb}"),
    row("&lang;", "\u{27e8}"),
    row("&langd;", "\u{2991}"),
    row("&langle;", "\u{27e8}"),
    row("&lap;", "\u{2a85}"),
    row("&laquo", "\u{ab}"),
    row("&laquo;", "\u{ab}"),
    row("&larr;", "\u{2190}"),
    row("&larrb;", "\u{21e4}"),
    row("&larrbfs;", "\u{291f}"),
    row("&larrfs;", "\u{291d}"),
    row("&larrhk;", "\u{21a9}"),
    row("&larrlp;", "\u{21ab}"),
    row("&larrpl;", "\u{2939}"),
    row("&larrsim;", "\u{2973}"),
    row("&larrtl;", "\u{21a2}"),
    row("&lat;", "\u{2aab}"),
    row("&latail;", "\u{2919}"),
    row("&late;", "\u{2aad}"),
    row("&lates;", "\u{2aad}\u{fe00}"),
    row("&lbarr;", "\u{290c}"),
    row("&lbbrk;", "\u{2772}"),
    row("&lbrace;", "{"),
    row("&lbrack;", "["),
    row("&lbrke;", "\u{298b}"),
    row("&lbrksld;", "\u{298f}"),
    row("&lbrkslu;", "\u{298d}"),
    row("&lcaron;", "\u{13e}"),
    row("&lcedil;", "\u{13c}"),
    row("&lceil;", "\u{2308}"),
    row("&lcub;", "{"),
    row("&lcy;", "\u{43b}"),
    row("&ldca;", "\u{2936}"),
    row("&ldquo;", "\u{201c}"),
    row("&ldquor;", "\u{201e}"),
    row("&ldrdhar;", "\u{2967}"),
    row("&ldrushar;", "\u{294b}"),
    row("&ldsh;", "\u{21b2}"),
    row("&le;", "\u{2264}"),
    row("&leftarrow;", "\u{2190}"),
    row("&leftarrowtail;", "\u{21a2}"),
    row("&leftharpoondown;", "\u{21bd}"),
    row("&leftharpoonup;", "\u{21bc}"),
    row("&leftleftarrows;", "\u{21c7}"),
    row("&leftrightarrow;", "\u{2194}"),
    row("&leftrightarrows;", "\u{21c6}"),
    row("&leftrightharpoons;", "\u{21cb}"),
    row("&leftrightsquigarrow;", "\u{21ad}"),
    row("&leftthreetimes;", "\u{22cb}"),
    row("&leg;", "\u{22da}"),
    row("&leq;", "\u{2264}"),
    row("&leqq;", "\u{2266}"),
    row("&leqslant;", "\u{2a7d}"),
    row("&les;", "\u{2a7d}"),
    row("&lescc;", "\u{2aa8}"),
    row("&lesdot;", "\u{2a7f}"),
    row("&lesdoto;", "\u{2a81}"),
    row("&lesdotor;", "\u{2a83}"),
    row("&lesg;", "\u{22da}\u{fe00}"),
    row("&lesges;", "\u{2a93}"),
    row("&lessapprox;", "\u{2a85}"),
    row("&lessdot;", "\u{22d6}"),
    row("&lesseqgtr;", "\u{22da}"),
    row("&lesseqqgtr;", "\u{2a8b}"),
    row("&lessgtr;", "\u{2276}"),
    row("&lesssim;", "\u{2272}"),
    row("&lfisht;", "\u{297c}"),
    row("&lfloor;", "\u{230a}"),
    row("&lfr;", "\u{1d529}"),
    row("&lg;", "\u{2276}"),
    row("&lgE;", "\u{2a91}"),
    row("&lhard;", "\u{21bd}"),
    row("&lharu;", "\u{21bc}"),
    row("&lharul;", "\u{296a}"),
    row("&lhblk;", "\u{2584}"),
    row("&ljcy;", "\u{459}"),
    row("&ll;", "\u{226a}"),
    row("&llarr;", "\u{21c7}"),
    row("&llcorner;", "\u{231e}"),
    row("&llhard;", "\u{296b}"),
    row("&lltri;", "\u{25fa}"),
    row("&lmidot;", "\u{140}"),
    row("&lmoust;", "\u{23b0}"),
    row("&lmoustache;", "\u{23b0}"),
    row("&lnE;", "\u{2268}"),
    row("&lnap;", "\u{2a89}"),
    row("&lnapprox;", "\u{2a89}"),
    row("&lne;", "\u{2a87}"),
    row("&lneq;", "\u{2a87}"),
    row("&lneqq;", "\u{2268}"),
    row("&lnsim;", "\u{22e6}"),
    row("&loang;", "\u{27ec}"),
    row("&loarr;", "\u{21fd}"),
    row("&lobrk;", "\u{27e6}"),
    row("&longleftarrow;", "\u{27f5}"),
    row("&longleftrightarrow;", "\u{27f7}"),
    row("&longmapsto;", "\u{27fc}"),
    row("&longrightarrow;", "\u{27f6}"),
    row("&looparrowleft;", "\u{21ab}"),
    row("&looparrowright;", "\u{21ac}"),
    row("&lopar;", "\u{2985}"),
    row("&lopf;", "\u{1d55d}"),
    row("&loplus;", "\u{2a2d}"),
    row("&lotimes;", "\u{2a34}"),
    row("&lowast;", "\u{2217}"),
    row("&lowbar;", "_"),
    row("&loz;", "\u{25ca}"),
    row("&lozenge;", "\u{25ca}"),
    row("&lozf;", "\u{29eb}"),
    row("&lpar;", "("),
    row("&lparlt;", "\u{2993}"),
    row("&lrarr;", "\u{21c6}"),
    row("&lrcorner;", "\u{231f}"),
    row("&lrhar;", "\u{21cb}"),
    row("&lrhard;", "\u{296d}"),
    row("&lrm;", "\u{200e}"),
    row("&lrtri;", "\u{22bf}"),
    row("&lsaquo;", "\u{2039}"),
    row("&lscr;", "\u{1d4c1}"),
    row("&lsh;", "\u{21b0}"),
    row("&lsim;", "\u{2272}"),
    row("&lsime;", "\u{2a8d}"),
    row("&lsimg;", "\u{2a8f}"),
    row("&lsqb;", "["),
    row("&lsquo;", "\u{2018}"),
    row("&lsquor;", "\u{201a}"),
    row("&lstrok;", "\u{142}"),
    row("&lt", "<"),
    row("&lt;", "<"),
    row("&ltcc;", "\u{2aa6}"),
    row("&ltcir;", "\u{2a79}"),
    row("&ltdot;", "\u{22d6}"),
    row("&lthree;", "\u{22cb}"),
    row("&ltimes;", "\u{22c9}"),
    row("&ltlarr;", "\u{2976}"),
    row("&ltquest;", "\u{2a7b}"),
    row("&ltrPar;", "\u{2996}"),
    row("&ltri;", "\u{25c3}"),
    row("&ltrie;", "\u{22b4}"),
    row("&ltrif;", "\u{25c2}"),
    row("&lurdshar;", "\u{294a}"),
    row("&luruhar;", "\u{2966}"),
    row("&lvertneqq;", "\u{2268}\u{fe00}"),
    row("&lvnE;", "\u{2268}\u{fe00}"),
    row("&mDDot;", "\u{223a}"),
    row("&macr", "\u{af}"),
    row("&macr;", "\u{af}"),
    row("&male;", "\u{2642}"),
    row("&malt;", "\u{2720}"),
    row("&maltese;", "\u{2720}"),
    row("&map;", "\u{21a6}"),
    row("&mapsto;", "\u{21a6}"),
    row("&mapstodown;", "\u{21a7}"),
    row("&mapstoleft;", "\u{21a4}"),
    row("&mapstoup;", "\u{21a5}"),
    row("&marker;", "\u{25ae}"),
    row("&mcomma;", "\u{2a29}"),
    row("&mcy;", "\u{43c}"),
    row("&mdash;", "\u{2014}"),
    row("&measuredangle;", "\u{2221}"),
    row("&mfr;", "\u{1d52a}"),
    row("&mho;", "\u{2127}"),
    row("&micro", "\u{b5}"),
    row("&micro;", "\u{b5}"),
    row("&mid;", "\u{2223}"),
    row("&midast;", "*"),
    row("&midcir;", "\u{2af0}"),
    row("&middot", "\u{b7}"),
    row("&middot;", "\u{b7}"),
    row("&minus;", "\u{2212}"),
    row("&minusb;", "\u{229f}"),
    row("&minusd;", "\u{2238}"),
    row("&minusdu;", "\u{2a2a}"),
    row("&mlcp;", "\u{2adb}"),
    row("&mldr;", "\u{2026}"),
    row("&mnplus;", "\u{2213}"),
    row("&models;", "\u{22a7}"),
    row("&mopf;", "\u{1d55e}"),
    row("&mp;", "\u{2213}"),
    row("&mscr;", "\u{1d4c2}"),
    row("&mstpos;", "\u{223e}"),
    row("&mu;", "\u{3bc}"),
    row("&multimap;", "\u{22b8}"),
    row("&mumap;", "\u{22b8}"),
    row("&nGg;", "\u{22d9}\u{338}"),
    row("&nGt;", "\u{226b}\u{20d2}"),
    row("&nGtv;", "\u{226b}\u{338}"),
    row("&nLeftarrow;", "\u{21cd}"),
    row("&nLeftrightarrow;", "\u{21ce}"),
    row("&nLl;", "\u{22d8}\u{338}"),
    row("&nLt;", "\u{226a}\u{20d2}"),
    row("&nLtv;", "\u{226a}\u{338}"),
    row("&nRightarrow;", "\u{21cf}"),
    row("&nVDash;", "\u{22af}"),
    row("&nVdash;", "\u{22ae}"),
    row("&nabla;", "\u{2207}"),
    row("&nacute;", "\u{144}"),
    row("&nang;", "\u{2220}\u{20d2}"),
    row("&nap;", "\u{2249}"),
    row("&napE;", "\u{2a70}\u{338}"),
    row("&napid;", "\u{224b}\u{338}"),
    row("&napos;", "\u{149}"),
    row("&napprox;", "\u{2249}"),
    row("&natur;", "\u{266e}"),
    row("&natural;", "\u{266e}"),
    row("&naturals;", "\u{2115}"),
    row("&nbsp", "\u{a0}"),
    row("&nbsp;", "\u{a0}"),
    row("&nbump;", "\u{224e}\u{338}"),
    row("&nbumpe;", "\u{224f}\u{338}"),
    row("&ncap;", "\u{2a43}"),
    row("&ncaron;", "\u{148}"),
    row("&ncedil;", "\u{146}"),
    row("&ncong;", "\u{2247}"),
    row("&ncongdot;", "\u{2a6d}\u{338}"),
    row("&ncup;", "\u{2a42}"),
    row("&ncy;", "\u{43d}"),
    row("&ndash;", "\u{2013}"),
    row("&ne;", "\u{2260}"),
    row("&neArr;", "\u{21d7}"),
    row("&nearhk;", "\u{2924}"),
    row("&nearr;", "\u{2197}"),
    row("&nearrow;", "\u{2197}"),
    row("&nedot;", "\u{2250}\u{338}"),
    row("&nequiv;", "\u{2262}"),
    row("&nesear;", "\u{2928}"),
    row("&nesim;", "\u{2242}\u{338}"),
    row("&nexist;", "\u{2204}"),
    row("&nexists;", "\u{2204}"),
    row("&nfr;", "\u{1d52b}"),
    row("&ngE;", "\u{2267}\u{338}"),
    row("&nge;", "\u{2271}"),
    row("&ngeq;", "\u{2271}"),
    row("&ngeqq;", "\u{2267}\u{338}"),
    row("&ngeqslant;", "\u{2a7e}\u{338}"),
    row("&nges;", "\u{2a7e}\u{338}"),
    row("&ngsim;", "\u{2275}"),
    row("&ngt;", "\u{226f}"),
    row("&ngtr;", "\u{226f}"),
    row("&nhArr;", "\u{21ce}"),
    row("&nharr;", "\u{21ae}"),
    row("&nhpar;", "\u{2af2}"),
    row("&ni;", "\u{220b}"),
    row("&nis;", "\u{22fc}"),
    row("&nisd;", "\u{22fa}"),
    row("&niv;", "\u{220b}"),
    row("&njcy;", "\u{45a}"),
    row("&nlArr;", "\u{21cd}"),
    row("&nlE;", "\u{2266}\u{338}"),
    row("&nlarr;", "\u{219a}"),
    row("&nldr;", "\u{2025}"),
    row("&nle;", "\u{2270}"),
    row("&nleftarrow;", "\u{219a}"),
    row("&nleftrightarrow;", "\u{21ae}"),
    row("&nleq;", "\u{2270}"),
    row("&nleqq;", "\u{2266}\u{338}"),
    row("&nleqslant;", "\u{2a7d}\u{338}"),
    row("&nles;", "\u{2a7d}\u{338}"),
    row("&nless;", "\u{226e}"),
    row("&nlsim;", "\u{2274}"),
    row("&nlt;", "\u{226e}"),
    row("&nltri;", "\u{22ea}"),
    row("&nltrie;", "\u{22ec}"),
    row("&nmid;", "\u{2224}"),
    row("&nopf;", "\u{1d55f}"),
    row("&not", "\u{ac}"),
    row("&not;", "\u{ac}"),
    row("&notin;", "\u{2209}"),
    row("&notinE;", "\u{22f9}\u{338}"),
    row("&notindot;", "\u{22f5}\u{338}"),
    row("&notinva;", "\u{2209}"),
    row("&notinvb;", "\u{22f7}"),
    row("&notinvc;", "\u{22f6}"),
    row("&notni;", "\u{220c}"),
    row("&notniva;", "\u{220c}"),
    row("&notnivb;", "\u{22fe}"),
    row("&notnivc;", "\u{22fd}"),
    row("&npar;", "\u{2226}"),
    row("&nparallel;", "\u{2226}"),
    row("&nparsl;", "\u{2afd}\u{20e5}"),
    row("&npart;", "\u{2202}\u{338}"),
    row("&npolint;", "\u{2a14}"),
    row("&npr;", "\u{2280}"),
    row("&nprcue;", "\u{22e0}"),
    row("&npre;", "\u{2aaf}\u{338}"),
    row("&nprec;", "\u{2280}"),
    row("&npreceq;", "\u{2aaf}\u{338}"),
    row("&nrArr;", "\u{21cf}"),
    row("&nrarr;", "\u{219b}"),
    row("&nrarrc;", "\u{2933}\u{338}"),
    row("&nrarrw;", "\u{219d}\u{338}"),
    row("&nrightarrow;", "\u{219b}"),
    row("&nrtri;", "\u{22eb}"),
    row("&nrtrie;", "\u{22ed}"),
    row("&nsc;", "\u{2281}"),
    row("&nsccue;", "\u{22e1}"),
    row("&nsce;", "\u{2ab0}\u{338}"),
    row("&nscr;", "\u{1d4c3}"),
    row("&nshortmid;", "\u{2224}"),
    row("&nshortparallel;", "\u{2226}"),
    row("&nsim;", "\u{2241}"),
    row("&nsime;", "\u{2244}"),
    row("&nsimeq;", "\u{2244}"),
    row("&nsmid;", "\u{2224}"),
    row("&nspar;", "\u{2226}"),
    row("&nsqsube;", "\u{22e2}"),
    row("&nsqsupe;", "\u{22e3}"),
    row("&nsub;", "\u{2284}"),
    row("&nsubE;", "\u{2ac5}\u{338}"),
    row("&nsube;", "\u{2288}"),
    row("&nsubset;", "\u{2282}\u{20d2}"),
    row("&nsubseteq;", "\u{2288}"),
    row("&nsubseteqq;", "\u{2ac5}\u{338}"),
    row("&nsucc;", "\u{2281}"),
    row("&nsucceq;", "\u{2ab0}\u{338}"),
    row("&nsup;", "\u{2285}"),
    row("&nsupE;", "\u{2ac6}\u{338}"),
    row("&nsupe;", "\u{2289}"),
    row("&nsupset;", "\u{2283}\u{20d2}"),
    row("&nsupseteq;", "\u{2289}"),
    row("&nsupseteqq;", "\u{2ac6}\u{338}"),
    row("&ntgl;", "\u{2279}"),
    row("&ntilde", "\u{f1}"),
    row("&ntilde;", "\u{f1}"),
    row("&ntlg;", "\u{2278}"),
    row("&ntriangleleft;", "\u{22ea}"),
    row("&ntrianglelefteq;", "\u{22ec}"),
    row("&ntriangleright;", "\u{22eb}"),
    row("&ntrianglerighteq;", "\u{22ed}"),
    row("&nu;", "\u{3bd}"),
    row("&num;", "#"),
    row("&numero;", "\u{2116}"),
    row("&numsp;", "\u{2007}"),
    row("&nvDash;", "\u{22ad}"),
    row("&nvHarr;", "\u{2904}"),
    row("&nvap;", "\u{224d}\u{20d2}"),
    row("&nvdash;", "\u{22ac}"),
    row("&nvge;", "\u{2265}\u{20d2}"),
    row("&nvgt;", ">\u{20d2}"),
    row("&nvinfin;", "\u{29de}"),
    row("&nvlArr;", "\u{2902}"),
    row("&nvle;", "\u{2264}\u{20d2}"),
    row("&nvlt;", "<\u{20d2}"),
    row("&nvltrie;", "\u{22b4}\u{20d2}"),
    row("&nvrArr;", "\u{2903}"),
    row("&nvrtrie;", "\u{22b5}\u{20d2}"),
    row("&nvsim;", "\u{223c}\u{20d2}"),
    row("&nwArr;", "\u{21d6}"),
    row("&nwarhk;", "\u{2923}"),
    row("&nwarr;", "\u{2196}"),
    row("&nwarrow;", "\u{2196}"),
    row("&nwnear;", "\u{2927}"),
    row("&oS;", "\u{24c8}"),
    row("&oacute", "\u{f3}"),
    row("&oacute;", "\u{f3}"),
    row("&oast;", "\u{229b}"),
    row("&ocir;", "\u{229a}"),
    row("&ocirc", "\u{f4}"),
    row("&ocirc;", "\u{f4}"),
    row("&ocy;", "\u{43e}"),
    row("&odash;", "\u{229d}"),
    row("&odblac;", "\u{151}"),
    row("&odiv;", "\u{2a38}"),
    row("&odot;", "\u{2299}"),
    row("&odsold;", "\u{29bc}"),
    row("&oelig;", "\u{153}"),
    row("&ofcir;", "\u{29bf}"),
    row("&ofr;", "\u{1d52c}"),
    row("&ogon;", "\u{2db}"),
    row("&ograve", "\u{f2}"),
    row("&ograve;", "\u{f2}"),
    row("&ogt;", "\u{29c1}"),
    row("&ohbar;", "\u{29b5}"),
    row("&ohm;", "\u{3a9}"),
    row("&oint;", "\u{222e}"),
    row("&olarr;", "\u{21ba}"),
    row("&olcir;", "\u{29be}"),
    row("&olcross;", "\u{29bb}"),
    row("&oline;", "\u{203e}"),
    row("&olt;", "\u{29c0}"),
    row("&omacr;", "\u{14d}"),
    row("&omega;", "\u{3c9}"),
    row("&omicron;", "\u{3bf}"),
    row("&omid;", "\u{29b6}"),
    row("&ominus;", "\u{2296}"),
    row("&oopf;", "\u{1d560}"),
    row("&opar;", "\u{29b7}"),
    row("&operp;", "\u{29b9}"),
    row("&oplus;", "\u{2295}"),
    row("&or;", "\u{2228}"),
    row("&orarr;", "\u{21bb}"),
    row("&ord;", "\u{2a5d}"),
    row("&order;", "\u{2134}"),
    row("&orderof;", "\u{2134}"),
    row("&ordf", "\u{aa}"),
    row("&ordf;", "\u{aa}"),
    row("&ordm", "\u{ba}"),
    row("&ordm;", "\u{ba}"),
    row("&origof;", "\u{22b6}"),
    row("&oror;", "\u{2a56}"),
    row("&orslope;", "\u{2a57}"),
    row("&orv;", "\u{2a5b}"),
    row("&oscr;", "\u{2134}"),
    row("&oslash", "\u{f8}"),
    row("&oslash;", "\u{f8}"),
    row("&osol;", "\u{2298}"),
    row("&otilde", "\u{f5}"),
    row("&otilde;", "\u{f5}"),
    row("&otimes;", "\u{2297}"),
    row("&otimesas;", "\u{2a36}"),
    row("&ouml", "\u{f6}"),
    row("&ouml;", "\u{f6}"),
    row("&ovbar;", "\u{233d}"),
    row("&par;", "\u{2225}"),
    row("&para", "\u{b6}"),
    row("&para;", "\u{b6}"),
    row("&parallel;", "\u{2225}"),
    row("&parsim;", "\u{2af3}"),
    row("&parsl;", "\u{2afd}"),
    row("&part;", "\u{2202}"),
    row("&pcy;", "\u{43f}"),
    row("&percnt;", "%"),
    row("&period;", "."),
    row("&permil;", "\u{2030}"),
    row("&perp;", "\u{22a5}"),
    row("&pertenk;", "\u{2031}"),
    row("&pfr;", "\u{1d52d}"),
    row("&phi;", "\u{3c6}"),
    row("&phiv;", "\u{3d5}"),
    row("&phmmat;", "\u{2133}"),
    row("&phone;", "\u{260e}"),
    row("&pi;", "\u{3c0}"),
    row("&pitchfork;", "\u{22d4}"),
    row("&piv;", "\u{3d6}"),
    row("&planck;", "\u{210f}"),
    row("&planckh;", "\u{210e}"),
    row("&plankv;", "\u{210f}"),
    row("&plus;", "+"),
    row("&plusacir;", "\u{2a23}"),
    row("&plusb;", "\u{229e}"),
    row("&pluscir;", "\u{2a22}"),
    row("&plusdo;", "\u{2214}"),
    row("&plusdu;", "\u{2a25}"),
    row("&pluse;", "\u{2a72}"),
    row("&plusmn", "\u{b1}"),
    row("&plusmn;", "\u{b1}"),
    row("&plussim;", "\u{2a26}"),
    row("&plustwo;", "\u{2a27}"),
    row("&pm;", "\u{b1}"),
    row("&pointint;", "\u{2a15}"),
    row("&popf;", "\u{1d561}"),
    row("&pound", "\u{a3}"),
    row("&pound;", "\u{a3}"),
    row("&pr;", "\u{227a}"),
    row("&prE;", "\u{2ab3}"),
    row("&prap;", "\u{2ab7}"),
    row("&prcue;", "\u{227c}"),
    row("&pre;", "\u{2aaf}"),
    row("&prec;", "\u{227a}"),
    row("&precapprox;", "\u{2ab7}"),
    row("&preccurlyeq;", "\u{227c}"),
    row("&preceq;", "\u{2aaf}"),
    row("&precnapprox;", "\u{2ab9}"),
    row("&precneqq;", "\u{2ab5}"),
    row("&precnsim;", "\u{22e8}"),
    row("&precsim;", "\u{227e}"),
    row("&prime;", "\u{2032}"),
    row("&primes;", "\u{2119}"),
    row("&prnE;", "\u{2ab5}"),
    row("&prnap;", "\u{2ab9}"),
    row("&prnsim;", "\u{22e8}"),
    row("&prod;", "\u{220f}"),
    row("&profalar;", "\u{232e}"),
    row("&profline;", "\u{2312}"),
    row("&profsurf;", "\u{2313}"),
    row("&prop;", "\u{221d}"),
    row("&propto;", "\u{221d}"),
    row("&prsim;", "\u{227e}"),
    row("&prurel;", "\u{22b0}"),
    row("&pscr;", "\u{1d4c5}"),
    row("&psi;", "\u{3c8}"),
    row("&puncsp;", "\u{2008}"),
    row("&qfr;", "\u{1d52e}"),
    row("&qint;", "\u{2a0c}"),
    row("&qopf;", "\u{1d562}"),
    row("&qprime;", "\u{2057}"),
    row("&qscr;", "\u{1d4c6}"),
    row("&quaternions;", "\u{210d}"),
    row("&quatint;", "\u{2a16}"),
    row("&quest;", "?"),
    row("&questeq;", "\u{225f}"),
    row("&quot", "\""),
    row("&quot;", "\""),
    row("&rAarr;", "\u{21db}"),
    row("&rArr;", "\u{21d2}"),
    row("&rAtail;", "\u{291c}"),
    row("&rBarr;", "\u{290f}"),
    row("&rHar;", "\u{2964}"),
    row("&race;", "\u{223d}\u{331}"),
    row("&racute;", "\u{155}"),
    row("&radic;", "\u{221a}"),
    row("&raemptyv;", "\u{29b3}"),
    row("&rang;", "\u{27e9}"),
    row("&rangd;", "\u{2992}"),
    row("&range;", "\u{29a5}"),
    row("&rangle;", "\u{27e9}"),
    row("&raquo", "\u{bb}"),
    row("&raquo;", "\u{bb}"),
    row("&rarr;", "\u{2192}"),
    row("&rarrap;", "\u{2975}"),
    row("&rarrb;", "\u{21e5}"),
    row("&rarrbfs;", "\u{2920}"),
    row("&rarrc;", "\u{2933}"),
    row("&rarrfs;", "\u{291e}"),
    row("&rarrhk;", "\u{21aa}"),
    row("&rarrlp;", "\u{21ac}"),
    row("&rarrpl;", "\u{2945}"),
    row("&rarrsim;", "\u{2974}"),
    row("&rarrtl;", "\u{21a3}"),
    row("&rarrw;", "\u{219d}"),
    row("&ratail;", "\u{291a}"),
    row("&ratio;", "\u{2236}"),
    row("&rationals;", "\u{211a}"),
    row("&rbarr;", "\u{290d}"),
    row("&rbbrk;", "\u{2773}"),
    row("&rbrace;", "}"),
    row("&rbrack;", "]"),
    row("&rbrke;", "\u{298c}"),
    row("&rbrksld;", "\u{298e}"),
    row("&rbrkslu;", "\u{2990}"),
    row("&rcaron;", "\u{159}"),
    row("&rcedil;", "\u{157}"),
    row("&rceil;", "\u{2309}"),
    row("&rcub;", "}"),
    row("&rcy;", "\u{440}"),
    row("&rdca;", "\u{2937}"),
    row("&rdldhar;", "\u{2969}"),
    row("&rdquo;", "\u{201d}"),
    row("&rdquor;", "\u{201d}"),
    row("&rdsh;", "\u{21b3}"),
    row("&real;", "\u{211c}"),
    row("&realine;", "\u{211b}"),
    row("&realpart;", "\u{211c}"),
    row("&reals;", "\u{211d}"),
    row("&rect;", "\u{25ad}"),
    row("&reg", "\u{ae}"),
    row("&reg;", "\u{ae}"),
    row("&rfisht;", "\u{297d}"),
    row("&rfloor;", "\u{230b}"),
    row("&rfr;", "\u{1d52f}"),
    row("&rhard;", "\u{21c1}"),
    row("&rharu;", "\u{21c0}"),
    row("&rharul;", "\u{296c}"),
    row("&rho;", "\u{3c1}"),
    row("&rhov;", "\u{3f1}"),
    row("&rightarrow;", "\u{2192}"),
    row("&rightarrowtail;", "\u{21a3}"),
    row("&rightharpoondown;", "\u{21c1}"),
    row("&rightharpoonup;", "\u{21c0}"),
    row("&rightleftarrows;", "\u{21c4}"),
    row("&rightleftharpoons;", "\u{21cc}"),
    row("&rightrightarrows;", "\u{21c9}"),
    row("&rightsquigarrow;", "\u{219d}"),
    row("&rightthreetimes;", "\u{22cc}"),
    row("&ring;", "\u{2da}"),
    row("&risingdotseq;", "\u{2253}"),
    row("&rlarr;", "\u{21c4}"),
    row("&rlhar;", "\u{21cc}"),
    row("&rlm;", "\u{200f}"),
    row("&rmoust;", "\u{23b1}"),
    row("&rmoustache;", "\u{23b1}"),
    row("&rnmid;", "\u{2aee}"),
    row("&roang;", "\u{27ed}"),
    row("&roarr;", "\u{21fe}"),
    row("&robrk;", "\u{27e7}"),
    row("&ropar;", "\u{2986}"),
    row("&ropf;", "\u{1d563}"),
    row("&roplus;", "\u{2a2e}"),
    row("&rotimes;", "\u{2a35}"),
    row("&rpar;", ")"),
    row("&rpargt;", "\u{2994}"),
    row("&rppolint;", "\u{2a12}"),
    row("&rrarr;", "\u{21c9}"),
    row("&rsaquo;", "\u{203a}"),
    row("&rscr;", "\u{1d4c7}"),
    row("&rsh;", "\u{21b1}"),
    row("&rsqb;", "]"),
    row("&rsquo;", "\u{2019}"),
    row("&rsquor;", "\u{2019}"),
    row("&rthree;", "\u{22cc}"),
    row("&rtimes;", "\u{22ca}"),
    row("&rtri;", "\u{25b9}"),
    row("&rtrie;", "\u{22b5}"),
    row("&rtrif;", "\u{25b8}"),
    row("&rtriltri;", "\u{29ce}"),
    row("&ruluhar;", "\u{2968}"),
    row("&rx;", "\u{211e}"),
    row("&sacute;", "\u{15b}"),
    row("&sbquo;", "\u{201a}"),
    row("&sc;", "\u{227b}"),
    row("&scE;", "\u{2ab4}"),
    row("&scap;", "\u{2ab8}"),
    row("&scaron;", "\u{161}"),
    row("&sccue;", "\u{227d}"),
    row("&sce;", "\u{2ab0}"),
    row("&scedil;", "\u{15f}"),
    row("&scirc;", "\u{15d}"),
    row("&scnE;", "\u{2ab6}"),
    row("&scnap;", "\u{2aba}"),
    row("&scnsim;", "\u{22e9}"),
    row("&scpolint;", "\u{2a13}"),
    row("&scsim;", "\u{227f}"),
    row("&scy;", "\u{441}"),
    row("&sdot;", "\u{22c5}"),
    row("&sdotb;", "\u{22a1}"),
    row("&sdote;", "\u{2a66}"),
    row("&seArr;", "\u{21d8}"),
    row("&searhk;", "\u{2925}"),
    row("&searr;", "\u{2198}"),
    row("&searrow;", "\u{2198}"),
    row("&sect", "\u{a7}"),
    row("&sect;", "\u{a7}"),
    row("&semi;", ";"),
    row("&seswar;", "\u{2929}"),
    row("&setminus;", "\u{2216}"),
    row("&setmn;", "\u{2216}"),
    row("&sext;", "\u{2736}"),
    row("&sfr;", "\u{1d530}"),
    row("&sfrown;", "\u{2322}"),
    row("&sharp;", "\u{266f}"),
    row("&shchcy;", "\u{449}"),
    row("&shcy;", "\u{448}"),
    row("&shortmid;", "\u{2223}"),
    row("&shortparallel;", "\u{2225}"),
    row("&shy", "\u{ad}"),
    row("&shy;", "\u{ad}"),
    row("&sigma;", "\u{3c3}"),
    row("&sigmaf;", "\u{3c2}"),
    row("&sigmav;", "\u{3c2}"),
    row("&sim;", "\u{223c}"),
    row("&simdot;", "\u{2a6a}"),
    row("&sime;", "\u{2243}"),
    row("&simeq;", "\u{2243}"),
    row("&simg;", "\u{2a9e}"),
    row("&simgE;", "\u{2aa0}"),
    row("&siml;", "\u{2a9d}"),
    row("&simlE;", "\u{2a9f}"),
    row("&simne;", "\u{2246}"),
    row("&simplus;", "\u{2a24}"),
    row("&simrarr;", "\u{2972}"),
    row("&slarr;", "\u{2190}"),
    row("&smallsetminus;", "\u{2216}"),
    row("&smashp;", "\u{2a33}"),
    row("&smeparsl;", "\u{29e4}"),
    row("&smid;", "\u{2223}"),
    row("&smile;", "\u{2323}"),
    row("&smt;", "\u{2aaa}"),
    row("&smte;", "\u{2aac}"),
    row("&smtes;", "\u{2aac}\u{fe00}"),
    row("&softcy;", "\u{44c}"),
    row("&sol;", "/"),
    row("&solb;", "\u{29c4}"),
    row("&solbar;", "\u{233f}"),
    row("&sopf;", "\u{1d564}"),
    row("&spades;", "\u{2660}"),
    row("&spadesuit;", "\u{2660}"),
    row("&spar;", "\u{2225}"),
    row("&sqcap;", "\u{2293}"),
    row("&sqcaps;", "\u{2293}\u{fe00}"),
    row("&sqcup;", "\u{2294}"),
    row("&sqcups;", "\u{2294}\u{fe00}"),
    row("&sqsub;", "\u{228f}"),
    row("&sqsube;", "\u{2291}"),
    row("&sqsubset;", "\u{228f}"),
    row("&sqsubseteq;", "\u{2291}"),
    row("&sqsup;", "\u{2290}"),
    row("&sqsupe;", "\u{2292}"),
    row("&sqsupset;", "\u{2290}"),
    row("&sqsupseteq;", "\u{2292}"),
    row("&squ;", "\u{25a1}"),
    row("&square;", "\u{25a1}"),
    row("&squarf;", "\u{25aa}"),
    row("&squf;", "\u{25aa}"),
    row("&srarr;", "\u{2192}"),
    row("&sscr;", "\u{1d4c8}"),
    row("&ssetmn;", "\u{2216}"),
    row("&ssmile;", "\u{2323}"),
    row("&sstarf;", "\u{22c6}"),
    row("&star;", "\u{2606}"),
    row("&starf;", "\u{2605}"),
    row("&straightepsilon;", "\u{3f5}"),
    row("&straightphi;", "\u{3d5}"),
    row("&strns;", "\u{af}"),
    row("&sub;", "\u{2282}"),
    row("&subE;", "\u{2ac5}"),
    row("&subdot;", "\u{2abd}"),
    row("&sube;", "\u{2286}"),
    row("&subedot;", "\u{2ac3}"),
    row("&submult;", "\u{2ac1}"),
    row("&subnE;", "\u{2acb}"),
    row("&subne;", "\u{228a}"),
    row("&subplus;", "\u{2abf}"),
    row("&subrarr;", "\u{2979}"),
    row("&subset;", "\u{2282}"),
    row("&subseteq;", "\u{2286}"),
    row("&subseteqq;", "\u{2ac5}"),
    row("&subsetneq;", "\u{228a}"),
    row("&subsetneqq;", "\u{2acb}"),
    row("&subsim;", "\u{2ac7}"),
    row("&subsub;", "\u{2ad5}"),
    row("&subsup;", "\u{2ad3}"),
    row("&succ;", "\u{227b}"),
    row("&succapprox;", "\u{2ab8}"),
    row("&succcurlyeq;", "\u{227d}"),
    row("&succeq;", "\u{2ab0}"),
    row("&succnapprox;", "\u{2aba}"),
    row("&succneqq;", "\u{2ab6}"),
    row("&succnsim;", "\u{22e9}"),
    row("&succsim;", "\u{227f}"),
    row("&sum;", "\u{2211}"),
    row("&sung;", "\u{266a}"),
    row("&sup1", "\u{b9}"),
    row("&sup1;", "\u{b9}"),
    row("&sup2", "\u{b2}"),
    row("&sup2;", "\u{b2}"),
    row("&sup3", "\u{b3}"),
    row("&sup3;", "\u{b3}"),
    row("&sup;", "\u{2283}"),
    row("&supE;", "\u{2ac6}"),
    row("&supdot;", "\u{2abe}"),
    row("&supdsub;", "\u{2ad8}"),
    row("&supe;", "\u{2287}"),
    row("&supedot;", "\u{2ac4}"),
    row("&suphsol;", "\u{27c9}"),
    row("&suphsub;", "\u{2ad7}"),
    row("&suplarr;", "\u{297b}"),
    row("&supmult;", "\u{2ac2}"),
    row("&supnE;", "\u{2acc}"),
    row("&supne;", "\u{228b}"),
    row("&supplus;", "\u{2ac0}"),
    row("&supset;", "\u{2283}"),
    row("&supseteq;", "\u{2287}"),
    row("&supseteqq;", "\u{2ac6}"),
    row("&supsetneq;", "\u{228b}"),
    row("&supsetneqq;", "\u{2acc}"),
    row("&supsim;", "\u{2ac8}"),
    row("&supsub;", "\u{2ad4}"),
    row("&supsup;", "\u{2ad6}"),
    row("&swArr;", "\u{21d9}"),
    row("&swarhk;", "\u{2926}"),
    row("&swarr;", "\u{2199}"),
    row("&swarrow;", "\u{2199}"),
    row("&swnwar;", "\u{292a}"),
    row("&szlig", "\u{df}"),
    row("&szlig;", "\u{df}"),
    row("&target;", "\u{2316}"),
    row("&tau;", "\u{3c4}"),
    row("&tbrk;", "\u{23b4}"),
    row("&tcaron;", "\u{165}"),
    row("&tcedil;", "\u{163}"),
    row("&tcy;", "\u{442}"),
    row("&tdot;", "\u{20db}"),
    row("&telrec;", "\u{2315}"),
    row("&tfr;", "\u{1d531}"),
    row("&there4;", "\u{2234}"),
    row("&therefore;", "\u{2234}"),
    row("&theta;", "\u{3b8}"),
    row("&thetasym;", "\u{3d1}"),
    row("&thetav;", "\u{3d1}"),
    row("&thickapprox;", "\u{2248}"),
    row("&thicksim;", "\u{223c}"),
    row("&thinsp;", "\u{2009}"),
    row("&thkap;", "\u{2248}"),
    row("&thksim;", "\u{223c}"),
    row("&thorn", "\u{fe}"),
    row("&thorn;", "\u{fe}"),
    row("&tilde;", "\u{2dc}"),
    row("&times", "\u{d7}"),
    row("&times;", "\u{d7}"),
    row("&timesb;", "\u{22a0}"),
    row("&timesbar;", "\u{2a31}"),
    row("&timesd;", "\u{2a30}"),
    row("&tint;", "\u{222d}"),
    row("&toea;", "\u{2928}"),
    row("&top;", "\u{22a4}"),
    row("&topbot;", "\u{2336}"),
    row("&topcir;", "\u{2af1}"),
    row("&topf;", "\u{1d565}"),
    row("&topfork;", "\u{2ada}"),
    row("&tosa;", "\u{2929}"),
    row("&tprime;", "\u{2034}"),
    row("&trade;", "\u{2122}"),
    row("&triangle;", "\u{25b5}"),
    row("&triangledown;", "\u{25bf}"),
    row("&triangleleft;", "\u{25c3}"),
    row("&trianglelefteq;", "\u{22b4}"),
    row("&triangleq;", "\u{225c}"),
    row("&triangleright;", "\u{25b9}"),
    row("&trianglerighteq;", "\u{22b5}"),
    row("&tridot;", "\u{25ec}"),
    row("&trie;", "\u{225c}"),
    row("&triminus;", "\u{2a3a}"),
    row("&triplus;", "\u{2a39}"),
    row("&trisb;", "\u{29cd}"),
    row("&tritime;", "\u{2a3b}"),
    row("&trpezium;", "\u{23e2}"),
    row("&tscr;", "\u{1d4c9}"),
    row("&tscy;", "\u{446}"),
    row("&tshcy;", "\u{45b}"),
    row("&tstrok;", "\u{167}"),
    row("&twixt;", "\u{226c}"),
    row("&twoheadleftarrow;", "\u{219e}"),
    row("&twoheadrightarrow;", "\u{21a0}"),
    row("&uArr;", "\u{21d1}"),
    row("&uHar;", "\u{2963}"),
    row("&uacute", "\u{fa}"),
    row("&uacute;", "\u{fa}"),
    row("&uarr;", "\u{2191}"),
    row("&ubrcy;", "\u{45e}"),
    row("&ubreve;", "\u{16d}"),
    row("&ucirc", "\u{fb}"),
    row("&ucirc;", "\u{fb}"),
    row("&ucy;", "\u{443}"),
    row("&udarr;", "\u{21c5}"),
    row("&udblac;", "\u{171}"),
    row("&udhar;", "\u{296e}"),
    row("&ufisht;", "\u{297e}"),
    row("&ufr;", "\u{1d532}"),
    row("&ugrave", "\u{f9}"),
    row("&ugrave;", "\u{f9}"),
    row("&uharl;", "\u{21bf}"),
    row("&uharr;", "\u{21be}"),
    row("&uhblk;", "\u{2580}"),
    row("&ulcorn;", "\u{231c}"),
    row("&ulcorner;", "\u{231c}"),
    row("&ulcrop;", "\u{230f}"),
    row("&ultri;", "\u{25f8}"),
    row("&umacr;", "\u{16b}"),
    row("&uml", "\u{a8}"),
    row("&uml;", "\u{a8}"),
    row("&uogon;", "\u{173}"),
    row("&uopf;", "\u{1d566}"),
    row("&uparrow;", "\u{2191}"),
    row("&updownarrow;", "\u{2195}"),
    row("&upharpoonleft;", "\u{21bf}"),
    row("&upharpoonright;", "\u{21be}"),
    row("&uplus;", "\u{228e}"),
    row("&upsi;", "\u{3c5}"),
    row("&upsih;", "\u{3d2}"),
    row("&upsilon;", "\u{3c5}"),
    row("&upuparrows;", "\u{21c8}"),
    row("&urcorn;", "\u{231d}"),
    row("&urcorner;", "\u{231d}"),
    row("&urcrop;", "\u{230e}"),
    row("&uring;", "\u{16f}"),
    row("&urtri;", "\u{25f9}"),
    row("&uscr;", "\u{1d4ca}"),
    row("&utdot;", "\u{22f0}"),
    row("&utilde;", "\u{169}"),
    row("&utri;", "\u{25b5}"),
    row("&utrif;", "\u{25b4}"),
    row("&uuarr;", "\u{21c8}"),
    row("&uuml", "\u{fc}"),
    row("&uuml;", "\u{fc}"),
    row("&uwangle;", "\u{29a7}"),
    row("&vArr;", "\u{21d5}"),
    row("&vBar;", "\u{2ae8}"),
    row("&vBarv;", "\u{2ae9}"),
    row("&vDash;", "\u{22a8}"),
    row("&vangrt;", "\u{299c}"),
    row("&varepsilon;", "\u{3f5}"),
    row("&varkappa;", "\u{3f0}"),
    row("&varnothing;", "\u{2205}"),
    row("&varphi;", "\u{3d5}"),
    row("&varpi;", "\u{3d6}"),
    row("&varpropto;", "\u{221d}"),
    row("&varr;", "\u{2195}"),
    row("&varrho;", "\u{3f1}"),
    row("&varsigma;", "\u{3c2}"),
    row("&varsubsetneq;", "\u{228a}\u{fe00}"),
    row("&varsubsetneqq;", "\u{2acb}\u{fe00}"),
    row("&varsupsetneq;", "\u{228b}\u{fe00}"),
    row("&varsupsetneqq;", "\u{2acc}\u{fe00}"),
    row("&vartheta;", "\u{3d1}"),
    row("&vartriangleleft;", "\u{22b2}"),
    row("&vartriangleright;", "\u{22b3}"),
    row("&vcy;", "\u{432}"),
    row("&vdash;", "\u{22a2}"),
    row("&vee;", "\u{2228}"),
    row("&veebar;", "\u{22bb}"),
    row("&veeeq;", "\u{225a}"),
    row("&vellip;", "\u{22ee}"),
    row("&verbar;", "|"),
    row("&vert;", "|"),
    row("&vfr;", "\u{1d533}"),
    row("&vltri;", "\u{22b2}"),
    row("&vnsub;", "\u{2282}\u{20d2}"),
    row("&vnsup;", "\u{2283}\u{20d2}"),
    row("&vopf;", "\u{1d567}"),
    row("&vprop;", "\u{221d}"),
    row("&vrtri;", "\u{22b3}"),
    row("&vscr;", "\u{1d4cb}"),
    row("&vsubnE;", "\u{2acb}\u{fe00}"),
    row("&vsubne;", "\u{228a}\u{fe00}"),
    row("&vsupnE;", "\u{2acc}\u{fe00}"),
    row("&vsupne;", "\u{228b}\u{fe00}"),
    row("&vzigzag;", "\u{299a}"),
    row("&wcirc;", "\u{175}"),
    row("&wedbar;", "\u{2a5f}"),
    row("&wedge;", "\u{2227}"),
    row("&wedgeq;", "\u{2259}"),
    row("&weierp;", "\u{2118}"),
    row("&wfr;", "\u{1d534}"),
    row("&wopf;", "\u{1d568}"),
    row("&wp;", "\u{2118}"),
    row("&wr;", "\u{2240}"),
    row("&wreath;", "\u{2240}"),
    row("&wscr;", "\u{1d4cc}"),
    row("&xcap;", "\u{22c2}"),
    row("&xcirc;", "\u{25ef}"),
    row("&xcup;", "\u{22c3}"),
    row("&xdtri;", "\u{25bd}"),
    row("&xfr;", "\u{1d535}"),
    row("&xhArr;", "\u{27fa}"),
    row("&xharr;", "\u{27f7}"),
    row("&xi;", "\u{3be}"),
    row("&xlArr;", "\u{27f8}"),
    row("&xlarr;", "\u{27f5}"),
    row("&xmap;", "\u{27fc}"),
    row("&xnis;", "\u{22fb}"),
    row("&xodot;", "\u{2a00}"),
    row("&xopf;", "\u{1d569}"),
    row("&xoplus;", "\u{2a01}"),
    row("&xotime;", "\u{2a02}"),
    row("&xrArr;", "\u{27f9}"),
    row("&xrarr;", "\u{27f6}"),
    row("&xscr;", "\u{1d4cd}"),
    row("&xsqcup;", "\u{2a06}"),
    row("&xuplus;", "\u{2a04}"),
    row("&xutri;", "\u{25b3}"),
    row("&xvee;", "\u{22c1}"),
    row("&xwedge;", "\u{22c0}"),
    row("&yacute", "\u{fd}"),
    row("&yacute;", "\u{fd}"),
    row("&yacy;", "\u{44f}"),
    row("&ycirc;", "\u{177}"),
    row("&ycy;", "\u{44b}"),
    row("&yen", "\u{a5}"),
    row("&yen;", "\u{a5}"),
    row("&yfr;", "\u{1d536}"),
    row("&yicy;", "\u{457}"),
    row("&yopf;", "\u{1d56a}"),
    row("&yscr;", "\u{1d4ce}"),
    row("&yucy;", "\u{44e}"),
    row("&yuml", "\u{ff}"),
    row("&yuml;", "\u{ff}"),
    row("&zacute;", "\u{17a}"),
    row("&zcaron;", "\u{17e}"),
    row("&zcy;", "\u{437}"),
    row("&zdot;", "\u{17c}"),
    row("&zeetrf;", "\u{2128}"),
    row("&zeta;", "\u{3b6}"),
    row("&zfr;", "\u{1d537}"),
    row("&zhcy;", "\u{436}"),
    row("&zigrarr;", "\u{21dd}"),
    row("&zopf;", "\u{1d56b}"),
    row("&zscr;", "\u{1d4cf}"),
    row("&zwj;", "\u{200d}"),
    row("&zwnj;", "\u{200c}"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_should_hold_every_entity() {
        assert_eq!(NAMED_REFERENCES.len(), 2231);
    }

    #[test]
    fn find_should_reach_terminal_for_complete_name() {
        let cursor = NAMED_REFERENCE_TRIE.find(b"&amp;").unwrap();

        let reference = cursor.entity().unwrap();
        assert_eq!(reference.name, "&amp;");
        assert_eq!(reference.characters, "&");
    }

    #[test]
    fn find_should_reach_non_terminal_for_partial_name() {
        let cursor = NAMED_REFERENCE_TRIE.find(b"&Ar").unwrap();

        assert!(cursor.entity().is_none());
    }

    #[test]
    fn find_should_fail_on_missing_edge() {
        assert!(NAMED_REFERENCE_TRIE.find(b"&zz").is_none());
    }

    #[test]
    fn historical_names_should_match_without_semicolon() {
        let cursor = NAMED_REFERENCE_TRIE.find(b"&AMP").unwrap();

        let reference = cursor.entity().unwrap();
        assert_eq!(reference.characters, "&");
    }

    #[test]
    fn two_code_point_replacements_should_survive() {
        let cursor = NAMED_REFERENCE_TRIE.find(b"&NotEqualTilde;").unwrap();

        let reference = cursor.entity().unwrap();
        assert_eq!(reference.characters.chars().count(), 2);
    }
}
