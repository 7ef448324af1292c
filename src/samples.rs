//! Example programs shown in the playground

const SAMPLES: &[(&str, &str)] = &[
    (
        "hello",
        r#"fara
  rubuta "Sannu, Duniya!"
ƙare"#,
    ),
    (
        "variables",
        r#"fara
  var sunan = "Musa"
  var shekara = 25
  rubuta "Suna: " + sunan
  rubuta "Shekara: " + shekara
  rubuta sunan + " yana da shekara " + shekara
ƙare"#,
    ),
    (
        "conditions",
        r#"fara
  var maki = 75

  idan maki >= 70 {
    rubuta "Ka yi nasara! Maki: " + maki
  } ammaina maki >= 50 {
    rubuta "Ka wuce kawai. Maki: " + maki
  } amma {
    rubuta "Ka kasa. Maki: " + maki
  }
ƙare"#,
    ),
    (
        "loops",
        r#"fara
  # Buga lambobi 1 zuwa 5
  var i = 1
  maimaita (i <= 5) {
    rubuta "Lamba: " + i
    var i = i + 1
  }

  # For loop tare da jeri
  var sunaye = ["Musa", "Issa", "Fatima"]
  ga suna cikin sunaye {
    rubuta "Sannu, " + suna + "!"
  }
ƙare"#,
    ),
    (
        "functions",
        r#"fara
  aiki sallama(suna) {
    mayar "Sannu, " + suna + "!"
  }

  aiki jimlar(a, b) {
    mayar a + b
  }

  rubuta sallama("Ahmad")
  rubuta sallama("Fatima")

  var sakamakon = jimlar(10, 20)
  rubuta "Jimla: " + sakamakon
ƙare"#,
    ),
    (
        "lists",
        r#"fara
  var lambobi = [10, 20, 30, 40, 50]
  rubuta "Jeri: " + lambobi
  rubuta "Tsawo: " + lambobi.tsawo()

  # Zagaya jerin
  ga lamba cikin lambobi {
    rubuta "Lamba: " + lamba
  }

  # Haruffan jimla
  var kalma = "Dabara"
  rubuta "Tsawon kalma: " + kalma.tsawo()
  rubuta "Babba: " + kalma.babba()
  rubuta "Karami: " + kalma.karami()
ƙare"#,
    ),
    (
        "fibonacci",
        r#"fara
  aiki fibonacci(n) {
    idan n <= 1 {
      mayar n
    }
    mayar fibonacci(n - 1) + fibonacci(n - 2)
  }

  var i = 0
  maimaita (i < 10) {
    rubuta "fib(" + i + ") = " + fibonacci(i)
    var i = i + 1
  }
ƙare"#,
    ),
];

/// Sample names in catalog order
pub fn names() -> impl Iterator<Item = &'static str> {
    SAMPLES.iter().map(|(name, _)| *name)
}

pub fn get(name: &str) -> Option<&'static str> {
    SAMPLES
        .iter()
        .find(|(sample, _)| *sample == name)
        .map(|(_, source)| *source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{Category, scan};

    #[test]
    fn every_name_resolves() {
        assert_eq!(
            names().collect::<Vec<_>>(),
            ["hello", "variables", "conditions", "loops", "functions", "lists", "fibonacci"]
        );
        for name in names() {
            assert!(get(name).is_some(), "missing sample {name}");
        }
        assert!(get("nope").is_none());
    }

    #[test]
    fn fibonacci_calls_are_function_calls() {
        let source = get("fibonacci").unwrap();
        let calls = scan(source)
            .into_iter()
            .filter(|t| t.category == Category::FunctionCall)
            .map(|t| t.text)
            .collect::<Vec<_>>();
        // "fib(" inside the string literal is not a call
        assert_eq!(calls, vec!["fibonacci"; 4]);
    }
}
