use std::fmt;

/// An encoded environmental predictor of the dislike score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Factor {
    NatureContact,
    ReadingHabit,
    InsectBookReading,
    Gender,
    ResidenceArea,
}

impl Factor {
    /// Analysis order used by the report, the regression and the plots
    pub const ALL: [Factor; 5] = [
        Factor::NatureContact,
        Factor::ReadingHabit,
        Factor::InsectBookReading,
        Factor::Gender,
        Factor::ResidenceArea,
    ];

    /// Name of the encoded numeric column
    pub fn column(&self) -> &'static str {
        match self {
            Factor::NatureContact => "Nature_Contact_Num",
            Factor::ReadingHabit => "Reading_Habit_Num",
            Factor::InsectBookReading => "Insect_Book_Reading_Num",
            Factor::Gender => "Gender_Num",
            Factor::ResidenceArea => "Residence_Area_Num",
        }
    }

    /// Label used in the correlation report
    pub fn report_label(&self) -> &'static str {
        match self {
            Factor::NatureContact => "自然接触頻度",
            Factor::ReadingHabit => "読書習慣",
            Factor::InsectBookReading => "虫本読書頻度",
            Factor::Gender => "性別(女性=1)",
            Factor::ResidenceArea => "居住地域(都市化度)",
        }
    }

    /// Short English label for chart axes
    pub fn english(&self) -> &'static str {
        match self {
            Factor::NatureContact => "Nature Contact",
            Factor::ReadingHabit => "Reading Habit",
            Factor::InsectBookReading => "Insect Book",
            Factor::Gender => "Gender (F=1)",
            Factor::ResidenceArea => "Urban Residence",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}
