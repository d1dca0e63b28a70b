use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Weight status category, in ascending order of BMI.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString,
    IntoStaticStr,
)]
pub enum Classification {
    #[strum(serialize = "Abaixo do peso")]
    Underweight,
    #[strum(serialize = "Peso normal")]
    NormalWeight,
    #[strum(serialize = "Sobrepeso")]
    Overweight,
    #[strum(serialize = "Obesidade Grau I")]
    ObesityClassI,
    #[strum(serialize = "Obesidade Grau II")]
    ObesityClassII,
    #[strum(serialize = "Obesidade Grau III")]
    ObesityClassIII,
}

impl Classification {
    pub fn label(&self) -> &'static str {
        self.into()
    }

    /// Inclusive lower bound and exclusive upper bound of the category.
    pub fn bounds(&self) -> (Option<f64>, Option<f64>) {
        match self {
            Classification::Underweight => (None, Some(18.5)),
            Classification::NormalWeight => (Some(18.5), Some(25.0)),
            Classification::Overweight => (Some(25.0), Some(30.0)),
            Classification::ObesityClassI => (Some(30.0), Some(35.0)),
            Classification::ObesityClassII => (Some(35.0), Some(40.0)),
            Classification::ObesityClassIII => (Some(40.0), None),
        }
    }

    pub fn iter() -> ClassificationIter {
        <Self as strum::IntoEnumIterator>::iter()
    }
}

/// Maps a BMI value onto its category. Lower bounds are inclusive.
///
/// Any `f64` is accepted. NaN fails every comparison and ends up in the
/// last category.
pub fn classify(bmi: f64) -> Classification {
    if bmi < 18.5 {
        Classification::Underweight
    } else if bmi < 25.0 {
        Classification::NormalWeight
    } else if bmi < 30.0 {
        Classification::Overweight
    } else if bmi < 35.0 {
        Classification::ObesityClassI
    } else if bmi < 40.0 {
        Classification::ObesityClassII
    } else {
        Classification::ObesityClassIII
    }
}
