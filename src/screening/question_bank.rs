//! Hand-authored question banks, one per age band.
//!
//! Each bank holds ten scored questions followed by the unscored pricing
//! item, plus the absolute-score thresholds and labels used for the overall
//! level. Content is fixed at compile time.

use super::age::AgeBand;
use super::domain::{DevelopmentDomain, OverallTier};
use serde::Serialize;

/// Ordinal of the free-entry pricing question in every band.
pub const PRICING_QUESTION_NUMBER: u32 = 11;
/// Best answer to any scored question.
pub const MAX_POINTS_PER_QUESTION: u32 = 2;
/// Number of scored questions every bank must carry. The overall thresholds
/// are absolute cutoffs out of `SCORED_QUESTIONS_PER_BAND * 2`.
pub const SCORED_QUESTIONS_PER_BAND: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub code: &'static str,
    pub label: &'static str,
    pub points: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionKind {
    Scored {
        domain: DevelopmentDomain,
        options: [AnswerOption; 3],
    },
    /// Numeric free entry; carries no points.
    Pricing { placeholder: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub number: u32,
    pub prompt: &'static str,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

impl Question {
    /// Scored domain, or `None` for the pricing item.
    pub fn domain(&self) -> Option<DevelopmentDomain> {
        match self.kind {
            QuestionKind::Scored { domain, .. } => Some(domain),
            QuestionKind::Pricing { .. } => None,
        }
    }

    pub fn is_pricing(&self) -> bool {
        matches!(self.kind, QuestionKind::Pricing { .. })
    }

    pub fn option(&self, code: &str) -> Option<&AnswerOption> {
        match &self.kind {
            QuestionKind::Scored { options, .. } => {
                options.iter().find(|option| option.code == code)
            }
            QuestionKind::Pricing { .. } => None,
        }
    }

    /// Points for the chosen code; unknown codes and the pricing item score 0.
    pub fn points_for(&self, code: &str) -> u32 {
        self.option(code).map(|option| option.points).unwrap_or(0)
    }

    /// True when the chosen code is a declared option worth nothing.
    pub fn is_critical_answer(&self, code: &str) -> bool {
        self.option(code).is_some_and(|option| option.points == 0)
    }
}

/// Absolute overall-score cutoffs and the band's wording for each tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverallThresholds {
    pub excellent_min: u32,
    pub moderate_min: u32,
    pub excellent_label: &'static str,
    pub moderate_label: &'static str,
    pub concern_label: &'static str,
    /// Tiers that earn the general encouragement message.
    pub maintain_tiers: &'static [OverallTier],
}

impl OverallThresholds {
    pub fn classify(&self, total_score: u32) -> OverallTier {
        if total_score >= self.excellent_min {
            OverallTier::Excellent
        } else if total_score >= self.moderate_min {
            OverallTier::Moderate
        } else {
            OverallTier::Concern
        }
    }

    pub fn label(&self, tier: OverallTier) -> &'static str {
        match tier {
            OverallTier::Excellent => self.excellent_label,
            OverallTier::Moderate => self.moderate_label,
            OverallTier::Concern => self.concern_label,
        }
    }

    pub fn triggers_maintain(&self, tier: OverallTier) -> bool {
        self.maintain_tiers.contains(&tier)
    }
}

#[derive(Debug, Serialize)]
pub struct QuestionBank {
    pub band: AgeBand,
    pub title: &'static str,
    pub questions: [Question; SCORED_QUESTIONS_PER_BAND + 1],
    pub thresholds: OverallThresholds,
}

impl QuestionBank {
    pub fn question(&self, number: u32) -> Option<&Question> {
        self.questions
            .iter()
            .find(|question| question.number == number)
    }

    pub fn scored_questions(&self) -> impl Iterator<Item = &Question> + '_ {
        self.questions
            .iter()
            .filter(|question| !question.is_pricing())
    }
}

pub fn bank_for(band: AgeBand) -> &'static QuestionBank {
    match band {
        AgeBand::Toddler => &TODDLER_BANK,
        AgeBand::Preschool => &PRESCHOOL_BANK,
        AgeBand::School => &SCHOOL_BANK,
    }
}

/// Presentation-ordered questions for a band.
pub fn questions_for(band: AgeBand) -> &'static [Question] {
    &bank_for(band).questions
}

const fn scored(
    number: u32,
    prompt: &'static str,
    domain: DevelopmentDomain,
    labels: [&'static str; 3],
) -> Question {
    weighted(number, prompt, domain, labels, [2, 1, 0])
}

const fn weighted(
    number: u32,
    prompt: &'static str,
    domain: DevelopmentDomain,
    labels: [&'static str; 3],
    points: [u32; 3],
) -> Question {
    Question {
        number,
        prompt,
        kind: QuestionKind::Scored {
            domain,
            options: [
                AnswerOption {
                    code: "A",
                    label: labels[0],
                    points: points[0],
                },
                AnswerOption {
                    code: "B",
                    label: labels[1],
                    points: points[1],
                },
                AnswerOption {
                    code: "C",
                    label: labels[2],
                    points: points[2],
                },
            ],
        },
    }
}

/// No band's overall tier currently earns the encouragement message.
const NO_MAINTAIN_TIERS: &[OverallTier] = &[];

const PRICING_QUESTION: Question = Question {
    number: PRICING_QUESTION_NUMBER,
    prompt: "If Talktu offered a personalized platform with AI-powered learning tools, progress tracking, and expert support for your child, how much would you be willing to pay per month (in Naira)?",
    kind: QuestionKind::Pricing {
        placeholder: "Enter amount in Naira (e.g., 10000)",
    },
};

use DevelopmentDomain::{Cognitive, Literacy, Numeracy, SpeechLanguage};

static TODDLER_BANK: QuestionBank = QuestionBank {
    band: AgeBand::Toddler,
    title: "Ages 2–3 Years: Emerging Comprehension & Early Expression",
    questions: [
        scored(
            1,
            "When shown four items and asked, \"Which one do we use for eating?\", your child:",
            SpeechLanguage,
            [
                "Picks the spoon",
                "Hesitates, then guesses",
                "Picks randomly or doesn't respond",
            ],
        ),
        scored(
            2,
            "Your child is asked to complete this sentence: \"The cow says…\"",
            SpeechLanguage,
            [
                "\"Moo\" or similar sound",
                "Looks confused",
                "Repeats \"cow\" or is silent",
            ],
        ),
        scored(
            3,
            "When you change one detail in a routine (e.g., wear shoes before trousers), your child:",
            Cognitive,
            [
                "Notices and comments/questions",
                "Doesn't notice",
                "Gets upset or confused",
            ],
        ),
        scored(
            4,
            "If you say: \"Touch your head, then clap your hands,\" your child:",
            SpeechLanguage,
            ["Does both correctly", "Does only one", "Doesn't respond"],
        ),
        scored(
            5,
            "You show your child a banana and an orange and ask: \"Which one do you peel?\"",
            Cognitive,
            ["Selects banana", "Confused or silent", "Picks randomly"],
        ),
        scored(
            6,
            "Which best describes your child's pretend play?",
            Cognitive,
            [
                "Imitates adults (e.g., feeding doll)",
                "Only mimics real activities (e.g., sweeping)",
                "Doesn't engage in pretend play",
            ],
        ),
        scored(
            7,
            "If shown a ball, a spoon, a plate, and a shoe and asked, \"Which one is not like the others?\", your child:",
            Cognitive,
            [
                "Points to the ball (not for eating/wearing)",
                "Guesses",
                "Doesn't understand",
            ],
        ),
        scored(
            8,
            "Can your child recognize and say their name when asked: \"What's your name?\"",
            SpeechLanguage,
            ["Yes", "Sometimes", "No"],
        ),
        scored(
            9,
            "When asked, \"Where do you sleep?\" your child says or points to:",
            SpeechLanguage,
            ["Bed or bedroom", "Any unrelated item", "Doesn't respond"],
        ),
        scored(
            10,
            "If you sing the beginning of a song your child knows (e.g., \"Twinkle twinkle…\"), they:",
            SpeechLanguage,
            [
                "Continue the next part",
                "Smile but don't continue",
                "Uninterested or silent",
            ],
        ),
        PRICING_QUESTION,
    ],
    thresholds: OverallThresholds {
        excellent_min: 16,
        moderate_min: 10,
        excellent_label: "Age-Appropriate Development",
        moderate_label: "Some Delays - Monitor Closely",
        concern_label: "Significant Delays - Assessment Recommended",
        maintain_tiers: NO_MAINTAIN_TIERS,
    },
};

static PRESCHOOL_BANK: QuestionBank = QuestionBank {
    band: AgeBand::Preschool,
    title: "Ages 4–5 Years: Pre-Academic Readiness & Verbal Reasoning",
    questions: [
        scored(
            1,
            "When shown 4 words: \"dog, door, sun, doll\" — and asked \"Which 2 start with the same sound?\", your child:",
            Literacy,
            ["Says \"dog and doll\"", "Needs help", "Can't identify"],
        ),
        scored(
            2,
            "If you ask your child to explain why we wear raincoats when it rains, they:",
            SpeechLanguage,
            [
                "Say, \"So we don't get wet\" or similar",
                "Give a vague answer",
                "Say, \"I don't know\"",
            ],
        ),
        scored(
            3,
            "When given a basic pattern (e.g., red, blue, red, blue...), your child can:",
            Numeracy,
            ["Continue the pattern", "Needs help", "Struggles completely"],
        ),
        scored(
            4,
            "When told: \"Draw a picture of your house and family,\" your child:",
            Cognitive,
            [
                "Draws identifiable figures/details",
                "Draws scribbles with some attempt",
                "Avoids or doesn't try",
            ],
        ),
        scored(
            5,
            "You ask: \"Which is heavier: a feather or a rock?\" Your child:",
            Cognitive,
            [
                "Says \"rock\"",
                "Guesses",
                "Doesn't understand the question",
            ],
        ),
        scored(
            6,
            "Can your child rhyme words (e.g., \"cat\" and \"hat\")?",
            Literacy,
            ["Yes", "Sometimes", "No"],
        ),
        scored(
            7,
            "When asked to clap out syllables in \"butterfly,\" your child:",
            Literacy,
            ["Claps 3 times", "Claps incorrectly", "Doesn't understand"],
        ),
        scored(
            8,
            "Your child is shown 4 pictures: \"dog, cat, bus, goat.\" Asked, \"Which one is used for transport?\", they:",
            Cognitive,
            ["Pick \"bus\"", "Guess randomly", "Pick an animal"],
        ),
        scored(
            9,
            "Asked to solve: \"You have 2 sweets, your friend gives you 2 more, how many now?\"",
            Numeracy,
            ["Says \"4\"", "Counts slowly", "Doesn't know"],
        ),
        scored(
            10,
            "When looking at a storybook, your child:",
            SpeechLanguage,
            [
                "Describes what's happening using details",
                "Names objects",
                "Silent or uninterested",
            ],
        ),
        PRICING_QUESTION,
    ],
    thresholds: OverallThresholds {
        excellent_min: 16,
        moderate_min: 10,
        excellent_label: "School-Ready",
        moderate_label: "Needs Support in Some Areas",
        concern_label: "Pre-Literacy/Numeracy Intervention Needed",
        maintain_tiers: NO_MAINTAIN_TIERS,
    },
};

static SCHOOL_BANK: QuestionBank = QuestionBank {
    band: AgeBand::School,
    title: "Ages 6–8 Years: Literacy, Math Reasoning, Comprehension",
    questions: [
        scored(
            1,
            "Your child is told: \"If all apples are red, and this is an apple, what color is it?\"",
            Cognitive,
            ["Says \"Red\"", "Hesitates", "Gets confused"],
        ),
        scored(
            2,
            "If given a passage like: \"Tayo forgot his umbrella. It rained. He got wet.\" Asked: \"Why did Tayo get wet?\"",
            Literacy,
            [
                "Says, \"Because he forgot umbrella\"",
                "Says \"It rained\"",
                "Doesn't connect the ideas",
            ],
        ),
        // Only B is grammatical here.
        weighted(
            3,
            "Which sentence is grammatically correct?",
            SpeechLanguage,
            ["He runned fast", "He ran fast", "Him fast run"],
            [0, 2, 0],
        ),
        scored(
            4,
            "Which best describes your child's reading ability?",
            Literacy,
            [
                "Reads fluently with understanding",
                "Can read but skips or guesses",
                "Struggles with full sentences",
            ],
        ),
        scored(
            5,
            "Asked to solve: \"Amaka has 5 pencils. She gives 2 away. How many left?\"",
            Numeracy,
            ["Says \"3\"", "Guesses", "Struggles"],
        ),
        scored(
            6,
            "You say: \"Tell me 3 things that are round.\" Your child says:",
            SpeechLanguage,
            ["Ball, orange, wheel", "Two items", "Cannot name any"],
        ),
        scored(
            7,
            "If shown the word \"big\" and asked for the opposite, your child says:",
            Literacy,
            ["Small", "Another unrelated word", "Doesn't answer"],
        ),
        scored(
            8,
            "You say: \"The boy is taller than the girl. The girl is taller than the baby. Who is the shortest?\"",
            Cognitive,
            ["Says \"The baby\"", "Guesses incorrectly", "Doesn't answer"],
        ),
        scored(
            9,
            "How does your child write a short story prompt like: \"The day I lost my shoe…\"?",
            Literacy,
            [
                "Writes 3–5 well-structured sentences",
                "Writes a few phrases",
                "Doesn't know what to write",
            ],
        ),
        scored(
            10,
            "When you say: \"After you finish eating, go wash your hands and pack your plate,\" your child:",
            Cognitive,
            [
                "Follows the full instruction",
                "Needs reminding",
                "Forgets or does only one",
            ],
        ),
        PRICING_QUESTION,
    ],
    thresholds: OverallThresholds {
        excellent_min: 16,
        moderate_min: 10,
        excellent_label: "Grade-Level Proficiency",
        moderate_label: "Below Grade Level - Tutoring Recommended",
        concern_label: "Significant Learning Gaps - Intervention Required",
        maintain_tiers: NO_MAINTAIN_TIERS,
    },
};
