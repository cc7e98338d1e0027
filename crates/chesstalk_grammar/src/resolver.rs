//! The phrase resolution pipeline.
//!
//! normalize → tokenize → split promotion → dispatch → execute plan →
//! validate outcome → apply warning policy.

use chesstalk_foundation::{
    AmbiguityKind, Error, ErrorContext, ErrorKind, OutcomeWarning, PieceKind, Result,
};
use chesstalk_oracle::ChessOracle;

use crate::condition::Condition;
use crate::config::{ResolverConfig, WarningPolicy};
use crate::engine::{ResolutionEngine, ResolutionOutcome};
use crate::grammar::{
    self, CoordinatePlan, FilterPlan, GrammarRule, NotationPlan, Plan, PostCheck, RuleContext,
};
use crate::normalize::normalize;
use crate::observer::{NullObserver, ResolutionObserver};
use crate::outcome::{OutcomeValidator, SpokenFacts};
use crate::syntax::Captures;
use crate::tokenizer::PhraseTokenizer;

/// A successfully resolved phrase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution<M> {
    /// The resolved move.
    pub mv: M,
    /// Its notation, with any check or mate suffix.
    pub notation: String,
    /// The grammar rule that matched.
    pub rule: &'static str,
    /// Outcome warnings that survived the warning policy.
    pub warnings: Vec<OutcomeWarning>,
}

/// Resolves spoken phrases against a chess oracle.
///
/// The resolver holds only configuration; every call borrows the oracle
/// exclusively for its duration.
#[derive(Clone, Debug, Default)]
pub struct PhraseResolver {
    config: ResolverConfig,
}

impl PhraseResolver {
    /// Creates a resolver with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resolver with the given configuration.
    #[must_use]
    pub fn with_config(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolves a phrase in the oracle's current position.
    ///
    /// The oracle's position is unchanged when this returns.
    ///
    /// # Errors
    ///
    /// Returns a parse, not-found, ambiguity, invalid-move or promotion error
    /// when the phrase does not denote exactly one legal move, and an outcome
    /// mismatch when warnings are denied.
    pub fn resolve<O: ChessOracle>(
        &self,
        phrase: &str,
        oracle: &mut O,
    ) -> Result<Resolution<O::Move>> {
        self.resolve_observed(phrase, oracle, &mut NullObserver)
    }

    /// Like [`resolve`](Self::resolve), reporting pipeline events to
    /// `observer`.
    ///
    /// # Errors
    ///
    /// See [`resolve`](Self::resolve).
    pub fn resolve_observed<O: ChessOracle>(
        &self,
        phrase: &str,
        oracle: &mut O,
        observer: &mut dyn ResolutionObserver,
    ) -> Result<Resolution<O::Move>> {
        observer.phrase_received(phrase);
        let result = self.run(phrase, oracle, observer);
        match &result {
            Ok(resolution) => observer.resolved(&resolution.notation),
            Err(err) => observer.failed(err),
        }
        result
    }

    fn run<O: ChessOracle>(
        &self,
        phrase: &str,
        oracle: &mut O,
        observer: &mut dyn ResolutionObserver,
    ) -> Result<Resolution<O::Move>> {
        let normalized = if self.config.normalize {
            normalize(phrase)
        } else {
            phrase.to_string()
        };
        observer.phrase_normalized(&normalized);

        let tokenized = PhraseTokenizer::tokenize(&normalized);
        observer.marker_extracted(tokenized.marker);

        let phrase_context = || ErrorContext::new().with_phrase(phrase);
        let (tokens, promotion) = grammar::split_promotion(phrase, &tokenized.tokens)
            .map_err(|err| err.with_context(phrase_context()))?;

        let (rule, captures) = grammar::dispatch(tokens, tokenized.marker)
            .ok_or_else(|| Error::unparsed(phrase).with_context(phrase_context()))?;
        observer.rule_matched(rule.name);

        let context = RuleContext {
            phrase,
            marker: tokenized.marker,
        };
        let mv = execute(rule, &captures, &context, promotion, oracle, observer)
            .map_err(|err| err.with_context(rule_context(phrase, rule, &captures)))?;

        let spoken = SpokenFacts {
            marker: tokenized.marker,
            said_takes: tokenized.said_takes(),
            source_disambiguated: rule.disambiguates_source,
        };
        let mut warnings = OutcomeValidator::validate(oracle, &mv, &spoken);
        for warning in &warnings {
            observer.warning_raised(warning);
        }
        match self.config.warnings {
            WarningPolicy::Ignore => warnings.clear(),
            WarningPolicy::Collect => {}
            WarningPolicy::Deny => {
                if !warnings.is_empty() {
                    let first = warnings.swap_remove(0);
                    return Err(Error::new(ErrorKind::OutcomeMismatch(first))
                        .with_context(rule_context(phrase, rule, &captures)));
                }
            }
        }

        Ok(Resolution {
            notation: oracle.notation(&mv),
            mv,
            rule: rule.name,
            warnings,
        })
    }
}

fn execute<O: ChessOracle>(
    rule: &GrammarRule,
    captures: &Captures<'_>,
    context: &RuleContext<'_>,
    promotion: Option<PieceKind>,
    oracle: &mut O,
    observer: &mut dyn ResolutionObserver,
) -> Result<O::Move> {
    match rule.plan(captures, context)? {
        Plan::Filter(plan) => run_filter(plan, context, promotion, oracle, observer),
        Plan::Notation(plan) => run_notation(plan, context, promotion, oracle),
        Plan::Coordinates(plan) => run_coordinates(plan, context, promotion, oracle),
    }
}

fn rule_context(phrase: &str, rule: &GrammarRule, captures: &Captures<'_>) -> ErrorContext {
    captures.bound().iter().fold(
        ErrorContext::new().with_phrase(phrase).with_rule(rule.name),
        |context, token| context.with_token(token.to_string()),
    )
}

fn run_filter<O: ChessOracle>(
    plan: FilterPlan,
    context: &RuleContext<'_>,
    promotion: Option<PieceKind>,
    oracle: &mut O,
    observer: &mut dyn ResolutionObserver,
) -> Result<O::Move> {
    let mut required = plan.required;
    if let Some(piece) = promotion {
        required.push(Condition::PromotesTo(piece));
    }

    match ResolutionEngine::resolve(
        oracle,
        &required,
        &plan.tie_breakers,
        plan.ambiguity,
        observer,
    ) {
        ResolutionOutcome::Unique(mv) => {
            match plan.post_check {
                PostCheck::None => {}
                PostCheck::SoleCaptureOnDestination => sole_capture(oracle, &mv)?,
            }
            Ok(mv)
        }
        ResolutionOutcome::NotFound => Err(Error::no_matching_move(context.phrase)),
        ResolutionOutcome::Ambiguous { kind, candidates } => {
            let all_promote = candidates
                .iter()
                .all(|mv| oracle.promotion(mv).is_some());
            if promotion.is_none() && all_promote {
                Err(Error::unspecified_promotion(context.phrase))
            } else {
                Err(Error::ambiguous(kind, plan.message))
            }
        }
    }
}

/// Rejects a capture when a piece on another square could capture on the
/// same destination.
fn sole_capture<O: ChessOracle>(oracle: &O, mv: &O::Move) -> Result<()> {
    let source = oracle.source(mv);
    let destination = oracle.destination(mv);
    let contested = oracle.legal_moves().iter().any(|other| {
        oracle.is_capture(other)
            && oracle.destination(other) == destination
            && oracle.source(other) != source
    });
    if contested {
        return Err(Error::ambiguous(
            AmbiguityKind::CaptureSource,
            format!(
                "Another piece can capture on {destination}. It seems like you want to take with the pawn, but please clarify."
            ),
        ));
    }
    Ok(())
}

fn run_notation<O: ChessOracle>(
    plan: NotationPlan,
    context: &RuleContext<'_>,
    promotion: Option<PieceKind>,
    oracle: &O,
) -> Result<O::Move> {
    let notation = match promotion {
        Some(piece) => format!("{}={}", plan.notation, promotion_letter(piece)?),
        None => plan.notation.clone(),
    };
    oracle.parse_notation(&notation).map_err(|_| {
        let promotes = format!("{}=Q", plan.notation);
        if promotion.is_none() && oracle.parse_notation(&promotes).is_ok() {
            Error::unspecified_promotion(context.phrase)
        } else {
            Error::invalid_move(plan.invalid, plan.message)
        }
    })
}

fn run_coordinates<O: ChessOracle>(
    plan: CoordinatePlan,
    context: &RuleContext<'_>,
    promotion: Option<PieceKind>,
    oracle: &O,
) -> Result<O::Move> {
    let mv = match oracle.parse_coordinates(plan.from, plan.to, promotion) {
        Ok(mv) => mv,
        Err(_) => {
            let promotes = oracle
                .parse_coordinates(plan.from, plan.to, Some(PieceKind::Queen))
                .is_ok();
            if promotion.is_none() && promotes {
                return Err(Error::unspecified_promotion(context.phrase));
            }
            return Err(Error::invalid_move(plan.invalid, plan.message));
        }
    };
    if let Some(piece) = plan.piece {
        if oracle.moving_piece(&mv) != piece {
            return Err(Error::invalid_move(plan.invalid, plan.message));
        }
    }
    Ok(mv)
}

fn promotion_letter(piece: PieceKind) -> Result<char> {
    piece
        .letter()
        .ok_or_else(|| Error::invalid_promotion(piece))
}
