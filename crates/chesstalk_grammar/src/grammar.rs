//! The grammar rule table.
//!
//! [`RULES`] is tried top to bottom and the first rule whose shape and guard
//! both match a phrase wins. Each rule compiles its bindings into a [`Plan`]:
//! either conditions for the resolution engine, or text for the oracle to
//! parse directly.

use chesstalk_foundation::{
    AmbiguityKind, CastlingSide, Error, InvalidMoveKind, OutcomeMarker, PieceKind, Result, Square,
};

use crate::condition::Condition;
use crate::syntax::{Captures, PieceClass, Slot, match_shape};
use crate::vocabulary::Token;

// =============================================================================
// Plans
// =============================================================================

/// What a rule asks the resolver to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Plan {
    /// Narrow the legal moves with conditions.
    Filter(FilterPlan),
    /// Hand notation to the oracle.
    Notation(NotationPlan),
    /// Hand coordinates to the oracle.
    Coordinates(CoordinatePlan),
}

/// A check applied to the unique move a filter plan produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PostCheck {
    /// Accept the move as is.
    #[default]
    None,
    /// Reject the move when a piece on another square could also capture on
    /// its destination.
    SoleCaptureOnDestination,
}

/// Conditions for the resolution engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterPlan {
    /// Conditions every candidate must satisfy.
    pub required: Vec<Condition>,
    /// Conditions used only to narrow an ambiguous set.
    pub tie_breakers: Vec<Condition>,
    /// Reported when more than one candidate survives.
    pub ambiguity: AmbiguityKind,
    /// Reported alongside the ambiguity.
    pub message: String,
    /// Applied to a unique result.
    pub post_check: PostCheck,
}

/// Standard notation for the oracle to parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotationPlan {
    /// The notation, without a promotion suffix.
    pub notation: String,
    /// Reported when the oracle rejects the notation.
    pub invalid: InvalidMoveKind,
    /// Reported alongside the rejection.
    pub message: String,
}

/// Coordinates for the oracle to look up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoordinatePlan {
    /// Source square.
    pub from: Square,
    /// Destination square.
    pub to: Square,
    /// The piece the phrase says is moving, if it named one.
    pub piece: Option<PieceKind>,
    /// Reported when no legal move matches.
    pub invalid: InvalidMoveKind,
    /// Reported alongside the rejection.
    pub message: String,
}

// =============================================================================
// Rules
// =============================================================================

/// An extra condition on the phrase beyond its shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleGuard {
    /// No condition.
    Always,
    /// The phrase ended with an outcome marker.
    MarkerSpoken,
}

/// What a rule builder sees besides its bindings.
#[derive(Clone, Copy, Debug)]
pub struct RuleContext<'a> {
    /// The phrase as the user gave it, for messages.
    pub phrase: &'a str,
    /// The extracted outcome marker.
    pub marker: OutcomeMarker,
}

type PlanBuilder = fn(&Captures<'_>, &RuleContext<'_>) -> Result<Plan>;

/// One entry of the rule table.
pub struct GrammarRule {
    /// Stable rule name, used in traces and error context.
    pub name: &'static str,
    /// The token shape.
    pub shape: &'static [Slot],
    /// The guard.
    pub guard: RuleGuard,
    /// Whether the phrase names the moving piece's square, file or rank.
    pub disambiguates_source: bool,
    build: PlanBuilder,
}

impl GrammarRule {
    /// Matches the rule against a tokenized phrase.
    #[must_use]
    pub fn matches<'t>(&self, tokens: &'t [Token], marker: OutcomeMarker) -> Option<Captures<'t>> {
        match self.guard {
            RuleGuard::Always => {}
            RuleGuard::MarkerSpoken if marker.is_spoken() => {}
            RuleGuard::MarkerSpoken => return None,
        }
        match_shape(self.shape, tokens)
    }

    /// Builds the rule's plan from a match.
    ///
    /// # Errors
    ///
    /// Returns an invalid-tokens error when the gap holds anything other than
    /// "takes".
    pub fn plan(&self, captures: &Captures<'_>, context: &RuleContext<'_>) -> Result<Plan> {
        (self.build)(captures, context)
    }
}

impl std::fmt::Debug for GrammarRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrammarRule")
            .field("name", &self.name)
            .field("shape", &self.shape)
            .field("guard", &self.guard)
            .finish_non_exhaustive()
    }
}

/// Finds the first rule matching the phrase.
#[must_use]
pub fn dispatch(
    tokens: &[Token],
    marker: OutcomeMarker,
) -> Option<(&'static GrammarRule, Captures<'_>)> {
    RULES
        .iter()
        .find_map(|rule| rule.matches(tokens, marker).map(|captures| (rule, captures)))
}

const PIECE: Slot = Slot::Piece(PieceClass::Any);
const CAPTURABLE: Slot = Slot::Piece(PieceClass::Capturable);
const CHECKING: Slot = Slot::Piece(PieceClass::Checking);

const fn rule(name: &'static str, shape: &'static [Slot], build: PlanBuilder) -> GrammarRule {
    GrammarRule {
        name,
        shape,
        guard: RuleGuard::Always,
        disambiguates_source: false,
        build,
    }
}

const fn guarded(name: &'static str, shape: &'static [Slot], build: PlanBuilder) -> GrammarRule {
    GrammarRule {
        guard: RuleGuard::MarkerSpoken,
        ..rule(name, shape, build)
    }
}

const fn sourced(name: &'static str, shape: &'static [Slot], build: PlanBuilder) -> GrammarRule {
    GrammarRule {
        disambiguates_source: true,
        ..rule(name, shape, build)
    }
}

/// The rule table, in dispatch order.
pub static RULES: &[GrammarRule] = &[
    rule(
        "castles-kingside",
        &[Slot::Castles, Slot::Side(CastlingSide::Kingside)],
        castles_kingside,
    ),
    rule(
        "castles-queenside",
        &[Slot::Castles, Slot::Side(CastlingSide::Queenside)],
        castles_queenside,
    ),
    rule("castles", &[Slot::Castles], castles),
    guarded("marker-only", &[], marker_only),
    guarded("checking-piece", &[CHECKING], checking_piece),
    rule("takes", &[Slot::Takes], takes),
    rule("file-takes", &[Slot::File, Slot::Takes], file_takes),
    rule("takes-file", &[Slot::Takes, Slot::File], takes_file),
    rule(
        "takes-square",
        &[Slot::Takes, Slot::File, Slot::Rank],
        takes_square,
    ),
    rule("takes-piece", &[Slot::Takes, CAPTURABLE], takes_piece),
    rule("piece-takes", &[PIECE, Slot::Takes], piece_takes),
    rule(
        "piece-takes-piece",
        &[PIECE, Slot::Takes, CAPTURABLE],
        piece_takes_piece,
    ),
    rule(
        "pawn-capture-square",
        &[Slot::File, Slot::Gap, Slot::File, Slot::Rank],
        pawn_capture_square,
    ),
    rule(
        "pawn-capture-file",
        &[Slot::File, Slot::Gap, Slot::File],
        pawn_capture_file,
    ),
    rule("pawn-push", &[Slot::File, Slot::Rank], pawn_push),
    sourced(
        "piece-square-takes-piece",
        &[PIECE, Slot::File, Slot::Rank, Slot::Takes, CAPTURABLE],
        piece_square_takes_piece,
    ),
    sourced(
        "piece-square-to-square",
        &[PIECE, Slot::File, Slot::Rank, Slot::Gap, Slot::File, Slot::Rank],
        piece_square_to_square,
    ),
    sourced(
        "piece-file-takes-piece",
        &[PIECE, Slot::File, Slot::Takes, CAPTURABLE],
        piece_file_takes_piece,
    ),
    sourced(
        "piece-file-to-square",
        &[PIECE, Slot::File, Slot::Gap, Slot::File, Slot::Rank],
        piece_file_to_square,
    ),
    sourced(
        "piece-rank-takes-piece",
        &[PIECE, Slot::Rank, Slot::Takes, CAPTURABLE],
        piece_rank_takes_piece,
    ),
    sourced(
        "piece-rank-to-square",
        &[PIECE, Slot::Rank, Slot::Gap, Slot::File, Slot::Rank],
        piece_rank_to_square,
    ),
    // Shadowed by piece-takes-piece; kept so the table lists every shape.
    rule(
        "piece-takes-piece-plain",
        &[PIECE, Slot::Takes, CAPTURABLE],
        piece_takes_piece_plain,
    ),
    rule(
        "piece-to-square",
        &[PIECE, Slot::Gap, Slot::File, Slot::Rank],
        piece_to_square,
    ),
];

// =============================================================================
// Plan builders
// =============================================================================

fn filter(
    required: Vec<Condition>,
    context: &RuleContext<'_>,
    ambiguity: AmbiguityKind,
    message: String,
) -> Result<Plan> {
    Ok(Plan::Filter(FilterPlan {
        required,
        tie_breakers: Condition::tie_breakers(context.marker),
        ambiguity,
        message,
        post_check: PostCheck::None,
    }))
}

/// Accepts an empty gap or a lone "takes".
fn plain_gap(captures: &Captures<'_>, context: &RuleContext<'_>) -> Result<()> {
    match captures.gap() {
        [] | [Token::Takes] => Ok(()),
        gap => Err(Error::invalid_tokens(context.phrase, words(gap))),
    }
}

fn words(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn marker_condition(context: &RuleContext<'_>) -> Result<Condition> {
    Condition::for_marker(context.marker)
        .ok_or_else(|| Error::internal("marker guard admitted an unspoken marker"))
}

fn marker_plural(marker: OutcomeMarker) -> String {
    format!("{}s", marker.word().unwrap_or("move"))
}

fn castles_kingside(_: &Captures<'_>, context: &RuleContext<'_>) -> Result<Plan> {
    filter(
        vec![
            Condition::IsCastling,
            Condition::CastlesToward(CastlingSide::Kingside),
        ],
        context,
        AmbiguityKind::Unclassified,
        "Cannot kingside castle here".to_string(),
    )
}

fn castles_queenside(_: &Captures<'_>, context: &RuleContext<'_>) -> Result<Plan> {
    filter(
        vec![
            Condition::IsCastling,
            Condition::CastlesToward(CastlingSide::Queenside),
        ],
        context,
        AmbiguityKind::Unclassified,
        "Cannot queenside castle here".to_string(),
    )
}

fn castles(_: &Captures<'_>, _: &RuleContext<'_>) -> Result<Plan> {
    Ok(Plan::Filter(FilterPlan {
        required: vec![Condition::IsCastling],
        tie_breakers: Vec::new(),
        ambiguity: AmbiguityKind::UnspecifiedCastlingDirection,
        message: "Please specify castling direction".to_string(),
        post_check: PostCheck::None,
    }))
}

fn marker_only(_: &Captures<'_>, context: &RuleContext<'_>) -> Result<Plan> {
    filter(
        vec![marker_condition(context)?],
        context,
        AmbiguityKind::CaptureSourceOrDestination,
        format!("Multiple {} exist", marker_plural(context.marker)),
    )
}

fn checking_piece(captures: &Captures<'_>, context: &RuleContext<'_>) -> Result<Plan> {
    let piece = captures.piece(0)?;
    filter(
        vec![Condition::SourcePiece(piece), marker_condition(context)?],
        context,
        AmbiguityKind::SourceOrDestination,
        format!("Multiple {piece} {} exist", marker_plural(context.marker)),
    )
}

fn takes(_: &Captures<'_>, context: &RuleContext<'_>) -> Result<Plan> {
    filter(
        vec![Condition::IsCapture],
        context,
        AmbiguityKind::SourceOrDestination,
        "Multiple captures exist".to_string(),
    )
}

fn file_takes(captures: &Captures<'_>, context: &RuleContext<'_>) -> Result<Plan> {
    let file = captures.file(0)?;
    filter(
        vec![
            Condition::IsCapture,
            Condition::SourcePiece(PieceKind::Pawn),
            Condition::SourceFile(file),
        ],
        context,
        AmbiguityKind::CaptureDestination,
        format!("There are multiple pawns on the {file}-file that can take a piece"),
    )
}

fn takes_file(captures: &Captures<'_>, context: &RuleContext<'_>) -> Result<Plan> {
    let file = captures.file(0)?;
    let mut plan = filter(
        vec![
            Condition::IsCapture,
            Condition::SourcePiece(PieceKind::Pawn),
            Condition::DestinationFile(file),
        ],
        context,
        AmbiguityKind::CaptureDestination,
        format!("There are multiple pawns that can take onto the {file}-file"),
    )?;
    if let Plan::Filter(filter) = &mut plan {
        filter.post_check = PostCheck::SoleCaptureOnDestination;
    }
    Ok(plan)
}

fn takes_square(captures: &Captures<'_>, context: &RuleContext<'_>) -> Result<Plan> {
    let square = Square::new(captures.file(0)?, captures.rank(0)?);
    filter(
        vec![Condition::IsCapture, Condition::DestinationSquare(square)],
        context,
        AmbiguityKind::CaptureSource,
        format!("Multiple pieces can take on {square}"),
    )
}

fn takes_piece(captures: &Captures<'_>, context: &RuleContext<'_>) -> Result<Plan> {
    let captured = captures.piece(0)?;
    filter(
        vec![Condition::IsCapture, Condition::CapturedPiece(captured)],
        context,
        AmbiguityKind::CaptureSourceOrDestination,
        format!(
            "Multiple {captured}s can be taken, or multiple pieces can take a {captured}"
        ),
    )
}

fn piece_takes(captures: &Captures<'_>, context: &RuleContext<'_>) -> Result<Plan> {
    let piece = captures.piece(0)?;
    filter(
        vec![Condition::IsCapture, Condition::SourcePiece(piece)],
        context,
        AmbiguityKind::CaptureSourceOrDestination,
        format!(
            "Multiple pieces can be taken by a {piece}, or multiple {piece}s can take a piece"
        ),
    )
}

fn piece_takes_piece(captures: &Captures<'_>, context: &RuleContext<'_>) -> Result<Plan> {
    let piece = captures.piece(0)?;
    let captured = captures.piece(1)?;
    filter(
        vec![
            Condition::IsCapture,
            Condition::SourcePiece(piece),
            Condition::CapturedPiece(captured),
        ],
        context,
        AmbiguityKind::CaptureSourceOrDestination,
        format!("There are multiple ways for a {piece} to take a {captured}"),
    )
}

fn piece_takes_piece_plain(captures: &Captures<'_>, context: &RuleContext<'_>) -> Result<Plan> {
    piece_takes_piece(captures, context)
}

fn pawn_capture_square(captures: &Captures<'_>, context: &RuleContext<'_>) -> Result<Plan> {
    let from_file = captures.file(0)?;
    let to = Square::new(captures.file(1)?, captures.rank(0)?);

    if let [Token::Rank(from_rank), rest @ ..] = captures.gap() {
        if matches!(rest, [] | [Token::Takes]) {
            let from = Square::new(from_file, *from_rank);
            return Ok(Plan::Coordinates(CoordinatePlan {
                from,
                to,
                piece: None,
                invalid: InvalidMoveKind::Coordinates,
                message: format!(
                    "Phrase was interpreted as coordinates, but the move \"{from}{to}\" is invalid"
                ),
            }));
        }
    }

    plain_gap(captures, context)?;
    Ok(Plan::Notation(NotationPlan {
        notation: format!("{from_file}x{to}"),
        invalid: InvalidMoveKind::PawnCapture,
        message: format!("Invalid pawn capture: \"{}\"", context.phrase),
    }))
}

fn pawn_capture_file(captures: &Captures<'_>, context: &RuleContext<'_>) -> Result<Plan> {
    plain_gap(captures, context)?;
    let from = captures.file(0)?;
    let to = captures.file(1)?;
    filter(
        vec![
            Condition::IsCapture,
            Condition::SourcePiece(PieceKind::Pawn),
            Condition::SourceFile(from),
            Condition::DestinationFile(to),
        ],
        context,
        AmbiguityKind::CaptureDestination,
        format!("Multiple pawns on the {from}-file can take onto the {to}-file"),
    )
}

fn pawn_push(captures: &Captures<'_>, _: &RuleContext<'_>) -> Result<Plan> {
    let square = Square::new(captures.file(0)?, captures.rank(0)?);
    Ok(Plan::Notation(NotationPlan {
        notation: square.to_string(),
        invalid: InvalidMoveKind::Destination,
        message: format!("No pawn can move to {square}"),
    }))
}

fn piece_square_takes_piece(captures: &Captures<'_>, context: &RuleContext<'_>) -> Result<Plan> {
    let piece = captures.piece(0)?;
    let captured = captures.piece(1)?;
    let source = Square::new(captures.file(0)?, captures.rank(0)?);
    filter(
        vec![
            Condition::IsCapture,
            Condition::SourceSquare(source),
            Condition::SourcePiece(piece),
            Condition::CapturedPiece(captured),
        ],
        context,
        AmbiguityKind::CaptureDestination,
        format!("Multiple {captured}s can be taken by the {piece} on {source}"),
    )
}

fn piece_square_to_square(captures: &Captures<'_>, context: &RuleContext<'_>) -> Result<Plan> {
    plain_gap(captures, context)?;
    Ok(Plan::Coordinates(CoordinatePlan {
        from: Square::new(captures.file(0)?, captures.rank(0)?),
        to: Square::new(captures.file(1)?, captures.rank(1)?),
        piece: Some(captures.piece(0)?),
        invalid: InvalidMoveKind::SourceOrDestination,
        message: format!("No valid move for phrase: \"{}\"", context.phrase),
    }))
}

fn piece_file_takes_piece(captures: &Captures<'_>, context: &RuleContext<'_>) -> Result<Plan> {
    let piece = captures.piece(0)?;
    let captured = captures.piece(1)?;
    let file = captures.file(0)?;
    filter(
        vec![
            Condition::IsCapture,
            Condition::SourcePiece(piece),
            Condition::SourceFile(file),
            Condition::CapturedPiece(captured),
        ],
        context,
        AmbiguityKind::CaptureSourceOrDestination,
        format!("There are multiple ways for a {piece} on the {file}-file to take a {captured}"),
    )
}

fn piece_file_to_square(captures: &Captures<'_>, context: &RuleContext<'_>) -> Result<Plan> {
    plain_gap(captures, context)?;
    let piece = captures.piece(0)?;
    let file = captures.file(0)?;
    let square = Square::new(captures.file(1)?, captures.rank(0)?);
    filter(
        vec![
            Condition::SourcePiece(piece),
            Condition::SourceFile(file),
            Condition::DestinationSquare(square),
        ],
        context,
        AmbiguityKind::CaptureSource,
        format!("Multiple {piece}s from the {file}-file can take on {square}"),
    )
}

fn piece_rank_takes_piece(captures: &Captures<'_>, context: &RuleContext<'_>) -> Result<Plan> {
    let piece = captures.piece(0)?;
    let captured = captures.piece(1)?;
    let rank = captures.rank(0)?;
    filter(
        vec![
            Condition::IsCapture,
            Condition::SourcePiece(piece),
            Condition::SourceRank(rank),
            Condition::CapturedPiece(captured),
        ],
        context,
        AmbiguityKind::CaptureSourceOrDestination,
        format!("There are multiple ways for a {piece} on the rank {rank} to take a {captured}"),
    )
}

fn piece_rank_to_square(captures: &Captures<'_>, context: &RuleContext<'_>) -> Result<Plan> {
    plain_gap(captures, context)?;
    let piece = captures.piece(0)?;
    let rank = captures.rank(0)?;
    let square = Square::new(captures.file(0)?, captures.rank(1)?);
    filter(
        vec![
            Condition::SourcePiece(piece),
            Condition::SourceRank(rank),
            Condition::DestinationSquare(square),
        ],
        context,
        AmbiguityKind::CaptureSource,
        format!("Multiple {piece}s from rank {rank} can take on {square}"),
    )
}

fn piece_to_square(captures: &Captures<'_>, context: &RuleContext<'_>) -> Result<Plan> {
    plain_gap(captures, context)?;
    let piece = captures.piece(0)?;
    let square = Square::new(captures.file(0)?, captures.rank(0)?);
    filter(
        vec![
            Condition::SourcePiece(piece),
            Condition::DestinationSquare(square),
        ],
        context,
        AmbiguityKind::CaptureSource,
        format!("Multiple {piece}s can take on {square}"),
    )
}

// =============================================================================
// Promotion clause
// =============================================================================

/// Splits a trailing `equals <piece>` clause off a token sequence.
///
/// # Errors
///
/// - `equals` with nothing after it: unspecified promotion piece
/// - `equals` followed by a pawn or king: invalid promotion piece
/// - `equals` followed by anything else: invalid tokens
pub fn split_promotion<'t>(
    phrase: &str,
    tokens: &'t [Token],
) -> Result<(&'t [Token], Option<PieceKind>)> {
    let Some(at) = tokens.iter().position(|token| *token == Token::Equals) else {
        return Ok((tokens, None));
    };
    let (head, clause) = tokens.split_at(at);
    match &clause[1..] {
        [] => Err(Error::unspecified_promotion(phrase)),
        [Token::Piece(piece)] if piece.is_promotable() => Ok((head, Some(*piece))),
        [Token::Piece(piece)] => Err(Error::invalid_promotion(*piece)),
        rest => Err(Error::invalid_tokens(phrase, words(rest))),
    }
}
