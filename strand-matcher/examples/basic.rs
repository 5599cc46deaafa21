use strand_matcher::{
    group::{Group, GroupOptional, Splitter, Unnamed},
    group_seq,
    matcher::{CodePoint, Edge, Ghost, IntoMatcher, Literal, Matcher, Position, Repeat},
    search::{Finder, TokenKind},
    seq,
    text::TextView,
};

fn main() {
    // Groups of three digits, except the first and last which allow one to three
    let digit = CodePoint::range('0', '9');
    let number = Repeat::builder()
        .inner(seq![Repeat::exactly(3, digit.clone()), CodePoint::literal(',')].into_matcher())
        .min(1)
        .first(Edge::optional(seq![
            Repeat::between(1, 3, digit.clone()),
            CodePoint::literal(',')
        ]))
        .last(Edge::required(seq![
            Repeat::between(1, 3, digit),
            Position::EndOfSlice
        ]))
        .build();
    assert!(number.match_string("1,567,890,3").unwrap());
    assert!(!number.match_string("1234,123").unwrap());

    // key=value pairs separated by "; "
    let word = || Repeat::one_or_more(CodePoint::none_of(['=', ';', ' ']));
    let pair = Group::nested(
        "pair",
        group_seq![
            Group::new("key", word()),
            GroupOptional::new(group_seq![
                Unnamed::new(CodePoint::literal('=')),
                Group::new("value", word())
            ]),
        ],
    );
    let splitter = Splitter::builder()
        .content(pair)
        .delimiter(Literal::from_string("; ").into_matcher())
        .build();
    let pairs = splitter.split_str("lang=rust; edition=2021; strict").unwrap().unwrap();
    for pair in &pairs {
        let key = pair.get("key").unwrap();
        match pair.get("value") {
            Some(value) => println!("{key} = {value}"),
            None => println!("{key}"),
        }
    }

    // Keywords, leaving the trailing space of each match for the next search
    let keyword = seq![
        Literal::builder(&["let", "mut"]).case_insensitive(true).build(),
        Ghost::new(CodePoint::literal(' '))
    ];
    let finder = Finder::matcher("keyword", keyword);
    for token in finder.find_all(&TextView::new("LET mut x = 1")).unwrap() {
        let kind = match token.kind {
            TokenKind::Match => token.category.as_ref(),
            TokenKind::Fragment => "-",
        };
        println!("{kind:>8} {:?}", token.value.to_string());
    }
}
