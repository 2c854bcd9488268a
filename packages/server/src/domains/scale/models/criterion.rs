use serde::Serialize;

use super::Gender;

/// One evaluation axis of the questionnaire.
///
/// Catalog position `i` holds criterion `id = i + 1` and lines up with
/// score index `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Criterion {
    pub id: u8,
    pub name: &'static str,
    pub description: &'static str,
}

impl Criterion {
    /// Criterion catalog for the rated person's gender.
    pub fn catalog(gender: Gender) -> &'static [Criterion; 10] {
        match gender {
            Gender::Male => &MALE_CRITERIA,
            Gender::Female => &FEMALE_CRITERIA,
        }
    }
}

pub static FEMALE_CRITERIA: [Criterion; 10] = [
    Criterion {
        id: 1,
        name: "Верность и порядочность (Базис)",
        description: "Отношение к изменам, наличие бывших в активном доступе, чистоплотность в общении с мужчинами.",
    },
    Criterion {
        id: 2,
        name: "Психологическая устойчивость (Адекватность)",
        description: "Отсутствие истерик, эмоциональных качелей, манипуляций («угадай, почему я обиделась»).",
    },
    Criterion {
        id: 3,
        name: "Пригодность к быту (Уют)",
        description: "Умение и желание создавать комфорт, отношение к чистоте и приготовлению еды.",
    },
    Criterion {
        id: 4,
        name: "Скромность и воспитание",
        description: "Поведение в обществе, отсутствие вульгарности, уважение к старшим и иерархии в отношениях.",
    },
    Criterion {
        id: 5,
        name: "Интеллект и гибкость ума",
        description: "Способность слышать аргументы, признавать ошибки, вести содержательный диалог.",
    },
    Criterion {
        id: 6,
        name: "Внешность и женственность",
        description: "Натуральная красота, уход за собой, мягкость движений, голос, стиль одежды.",
    },
    Criterion {
        id: 7,
        name: "Сексуальная совместимость",
        description: "Отсутствие «торговли» сексом, совпадение темпераментов, готовность радовать партнёра.",
    },
    Criterion {
        id: 8,
        name: "Уважение к мужчине (Признание лидерства)",
        description: "Готовность доверять решениям без попыток кастрировать критикой или советами под руку.",
    },
    Criterion {
        id: 9,
        name: "Жизненные ценности и цели",
        description: "Совпадение взглядов на семью, детей, деньги, развитие; отсутствие чистого потребительства.",
    },
    Criterion {
        id: 10,
        name: "Конфликтоустойчивость (Умение мириться)",
        description: "В ссоре: идёт на примирение или уходит в глухую оборону/агрессию на дни.",
    },
];

pub static MALE_CRITERIA: [Criterion; 10] = [
    Criterion {
        id: 1,
        name: "Верность и надёжность (Базис)",
        description: "Отношение к изменам, наличие бывших в активном доступе, чистоплотность в общении с женщинами, умение держать слово.",
    },
    Criterion {
        id: 2,
        name: "Психологическая устойчивость (Адекватность)",
        description: "Отсутствие вспышек гнева, зависимостей, манипуляций и игр в молчанку.",
    },
    Criterion {
        id: 3,
        name: "Пригодность к быту (Хозяйственность)",
        description: "Умение решать бытовые вопросы, участие в домашних делах, способность обеспечить дом.",
    },
    Criterion {
        id: 4,
        name: "Воспитание и манеры",
        description: "Поведение в обществе, отсутствие хамства, уважение к старшим и к окружающим.",
    },
    Criterion {
        id: 5,
        name: "Интеллект и гибкость ума",
        description: "Способность слышать аргументы, признавать ошибки, вести содержательный диалог.",
    },
    Criterion {
        id: 6,
        name: "Внешность и мужественность",
        description: "Уход за собой, физическая форма, уверенность, стиль одежды.",
    },
    Criterion {
        id: 7,
        name: "Сексуальная совместимость",
        description: "Совпадение темпераментов, внимание к желаниям партнёрши, отсутствие давления.",
    },
    Criterion {
        id: 8,
        name: "Уважение к женщине (Признание её мнения)",
        description: "Готовность считаться с её решениями без обесценивания, насмешек и контроля.",
    },
    Criterion {
        id: 9,
        name: "Жизненные ценности и цели",
        description: "Совпадение взглядов на семью, детей, деньги, развитие; наличие планов и амбиций.",
    },
    Criterion {
        id: 10,
        name: "Конфликтоустойчивость (Умение мириться)",
        description: "В ссоре: идёт на примирение или уходит в глухую оборону/агрессию на дни.",
    },
];
