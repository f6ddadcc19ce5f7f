//! Built-in curated lessons.
//!
//! Each preset carries vocabulary words (pooled into regular practice like any
//! lesson) and a set of grammar test questions drilled under
//! [`EvaluationPolicy::PresetTest`](crate::drill_engine::evaluator::EvaluationPolicy::PresetTest),
//! always answered in Portuguese.

use serde::{Deserialize, Serialize};

use crate::drill_engine::models::{Lesson, Prompt, VocabEntry};

/// One grammar test question: translate `en` into `pt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetQuestion {
    pub en: String,
    pub pt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
}

/// A curated lesson with its own test questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetLesson {
    pub id: String,
    pub name: String,
    pub tests: Vec<PresetQuestion>,
    pub words: Vec<VocabEntry>,
}

impl PresetLesson {
    /// Test questions as prompts: English shown, Portuguese typed, rule as note.
    pub fn test_prompts(&self) -> Vec<Prompt> {
        self.tests
            .iter()
            .map(|q| Prompt {
                label: Some(self.name.clone()),
                note: q.rule.clone(),
                ..Prompt::new(q.en.clone(), q.pt.clone())
            })
            .collect()
    }

    /// The preset's vocabulary as an ordinary lesson.
    pub fn lesson(&self) -> Lesson {
        Lesson::new(self.name.clone(), self.words.clone())
    }
}

fn build(
    id: &str,
    name: &str,
    tests: &[(&str, &str, &str)],
    words: &[(&str, &str, &str, &str)],
) -> PresetLesson {
    PresetLesson {
        id: id.to_string(),
        name: name.to_string(),
        tests: tests
            .iter()
            .map(|&(en, pt, rule)| PresetQuestion {
                en: en.to_string(),
                pt: pt.to_string(),
                rule: (!rule.is_empty()).then(|| rule.to_string()),
            })
            .collect(),
        words: words
            .iter()
            .map(|&(pt, en, sp, se)| VocabEntry::new(pt, en).with_sentences(sp, se))
            .collect(),
    }
}

/// Every built-in preset, in display order.
pub fn all_presets() -> Vec<PresetLesson> {
    vec![
        build("preset-prepositions-de", "Prepositions (DE +)", PREPOSITIONS_TESTS, PREPOSITIONS_WORDS),
        build("preset-verbs-de", "Verbs with DE", VERBS_DE_TESTS, VERBS_DE_WORDS),
        build("preset-numbers", "Numbers (Números)", NUMBERS_TESTS, NUMBERS_WORDS),
    ]
}

/// Look up a preset by id.
pub fn find_preset(id: &str) -> Option<PresetLesson> {
    all_presets().into_iter().find(|p| p.id == id)
}

// ---------------------------------------------------------------------------
// Content: (en, pt, rule) questions and (pt, en, sp, se) words
// ---------------------------------------------------------------------------

const PREPOSITIONS_TESTS: &[(&str, &str, &str)] = &[
    ("The car of the man.", "O carro do homem.", "de + o = do"),
    ("The door of the house.", "A porta da casa.", "de + a = da"),
    ("The end of the movie.", "O fim do filme.", "de + o = do"),
    ("The color of the shirt.", "A cor da camisa.", "de + a = da"),
    ("The name of the street.", "O nome da rua.", "de + a = da"),
    ("The taste of the food.", "O sabor da comida.", "de + a = da"),
    ("I came from that place.", "Eu vim daquele lugar.", "de + aquele = daquele"),
    ("The owner of that store.", "O dono daquela loja.", "de + aquela = daquela"),
    ("I'm tired of that noise.", "Estou cansado daquele barulho.", "de + aquele = daquele"),
    ("Far from that city.", "Longe daquela cidade.", "de + aquela = daquela"),
    ("I remember that party.", "Eu lembro daquela festa.", "de + aquela = daquela"),
    ("The owner of that house.", "O dono daquela casa.", "de + aquela = daquela"),
    ("His house is big.", "A casa dele é grande.", "de + ele = dele"),
    ("I like his dog.", "Eu gosto do cachorro dele.", "de + ele = dele"),
    ("His mother is nice.", "A mãe dele é legal.", "de + ele = dele"),
    ("Her father is tall.", "O pai dela é alto.", "de + ela = dela"),
    ("I know her brother.", "Eu conheço o irmão dela.", "de + ela = dela"),
    ("Her car is red.", "O carro dela é vermelho.", "de + ela = dela"),
    ("I'm afraid of this dog.", "Tenho medo desse cachorro.", "de + esse = desse"),
    ("The price of this car.", "O preço desse carro.", "de + esse = desse"),
    ("I'm tired of this job.", "Estou cansado desse trabalho.", "de + esse = desse"),
    ("The author of this book.", "O autor desse livro.", "de + esse = desse"),
    ("I'm tired of this conversation.", "Estou cansado dessa conversa.", "de + essa = dessa"),
    ("The end of this story.", "O fim dessa história.", "de + essa = dessa"),
    ("I'm sure of this.", "Tenho certeza disso.", "de + isso = disso"),
    ("I'm tired of this.", "Estou cansado disso.", "de + isso = disso"),
    ("Don't speak of this.", "Não fale disso.", "de + isso = disso"),
];

const PREPOSITIONS_WORDS: &[(&str, &str, &str, &str)] = &[
    ("de + o", "do", "O livro do menino.", "The boy's book."),
    ("de + a", "da", "A casa da Maria.", "Maria's house."),
    ("de + aquele", "daquele", "Gosto daquele carro.", "I like that car."),
    ("de + aquela", "daquela", "Perto daquela loja.", "Near that store."),
    ("de + ele", "dele", "O carro dele é novo.", "His car is new."),
    ("de + ela", "dela", "A mãe dela chegou.", "Her mother arrived."),
    ("de + esse", "desse", "Preciso desse livro.", "I need this book."),
    ("de + essa", "dessa", "Gosto dessa música.", "I like this song."),
    ("de + isso", "disso", "Não gosto disso.", "I don't like this."),
];

const VERBS_DE_TESTS: &[(&str, &str, &str)] = &[
    ("I like it (that)", "Eu gosto disso", "gostar de + isso = disso"),
    ("I like him", "Eu gosto dele", "gostar de + ele = dele"),
    ("I like her", "Eu gosto dela", "gostar de + ela = dela"),
    ("I like them", "Eu gosto deles", "gostar de + eles = deles"),
    ("I like staying here", "Eu gosto de ficar aqui", "gostar de + infinitive"),
    ("I like living here", "Eu gosto de morar aqui", "gostar de + infinitive"),
    ("She likes me", "Ela gosta de mim", "gostar de + mim"),
    ("She needs me", "Ela precisa de mim", "precisar de + mim"),
    ("I need this job", "Eu preciso desse emprego", "precisar de + esse = desse"),
    ("I need that book", "Eu preciso daquele livro", "precisar de + aquele = daquele"),
    ("I remember her", "Eu lembro dela", "lembrar de + ela = dela"),
    ("Do you remember this?", "Você lembra disso?", "lembrar de + isso = disso"),
    ("She remembers me", "Ela lembra de mim", "lembrar de + mim"),
    ("I take care of her", "Eu cuido dela", "cuidar de + ela = dela"),
    ("The book is on the table", "O livro está em cima da mesa", "em cima de + a = da"),
    ("The shoe is under the table", "O sapato está embaixo da mesa", "embaixo de + a = da"),
    ("The boy is behind the door", "O menino está atrás da porta", "atrás de + a = da"),
    ("The girl is in front of the house", "A menina está na frente da casa", "na frente de + a = da"),
    ("Before leaving home", "Antes de sair de casa", "antes de + infinitive"),
    ("After leaving home", "Depois de sair de casa", "depois de + infinitive"),
    ("Before eating", "Antes de comer", "antes de + infinitive"),
    ("After eating", "Depois de comer", "depois de + infinitive"),
    ("Before sleeping", "Antes de dormir", "antes de + infinitive"),
    ("After sleeping", "Depois de dormir", "depois de + infinitive"),
];

const VERBS_DE_WORDS: &[(&str, &str, &str, &str)] = &[
    ("gostar de", "to like", "Eu gosto de música.", "I like music."),
    ("precisar de", "to need", "Eu preciso de ajuda.", "I need help."),
    ("lembrar de", "to remember", "Eu lembro de você.", "I remember you."),
    ("cuidar de", "to take care of", "Eu cuido dela.", "I take care of her."),
    ("antes de", "before", "Antes de sair.", "Before leaving."),
    ("depois de", "after", "Depois de comer.", "After eating."),
    ("na frente de", "in front of", "Na frente da casa.", "In front of the house."),
    ("atrás de", "behind", "Atrás da porta.", "Behind the door."),
    ("em cima de", "on top of", "Em cima da mesa.", "On top of the table."),
    ("embaixo de", "under", "Embaixo da mesa.", "Under the table."),
    ("do lado de", "beside / next to", "Do lado da janela.", "Next to the window."),
];

const NUMBERS_TESTS: &[(&str, &str, &str)] = &[
    ("1", "um", ""),
    ("2", "dois", ""),
    ("3", "três", ""),
    ("4", "quatro", ""),
    ("5", "cinco", ""),
    ("6", "seis", ""),
    ("7", "sete", ""),
    ("8", "oito", ""),
    ("9", "nove", ""),
    ("10", "dez", ""),
    ("11", "onze", ""),
    ("12", "doze", ""),
    ("13", "treze", ""),
    ("14", "quatorze", ""),
    ("15", "quinze", ""),
    ("16", "dezesseis", ""),
    ("17", "dezessete", ""),
    ("18", "dezoito", ""),
    ("19", "dezenove", ""),
    ("20", "vinte", ""),
    ("30", "trinta", ""),
    ("40", "quarenta", ""),
    ("50", "cinquenta", ""),
    ("60", "sessenta", ""),
    ("70", "setenta", ""),
    ("80", "oitenta", ""),
    ("90", "noventa", ""),
    ("100", "cem", ""),
    ("101", "cento e um", ""),
    ("200", "duzentos", ""),
];

const NUMBERS_WORDS: &[(&str, &str, &str, &str)] = &[
    ("um", "one", "Eu tenho um carro.", "I have one car."),
    ("dois", "two", "Tenho dois irmãos.", "I have two brothers."),
    ("três", "three", "Três pessoas.", "Three people."),
    ("quatro", "four", "Quatro horas.", "Four hours."),
    ("cinco", "five", "Cinco dedos.", "Five fingers."),
    ("dez", "ten", "Dez reais.", "Ten reais."),
    ("vinte", "twenty", "Vinte anos.", "Twenty years."),
    ("cem", "one hundred", "Cem pessoas.", "One hundred people."),
];
