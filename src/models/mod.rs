// Estructuras de datos principales

use serde::{Deserialize, Serialize};

/// Un registro de choque tal como lo entrega el lector de archivos.
///
/// Los campos se guardan como texto sin interpretar; `total_students` sólo se
/// parsea al construir el grafo, donde un valor inválido es un error de formato.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClashRecord {
    pub academic_year: String,
    pub department_name: String,
    pub main_course_no: String,
    pub main_course_name: String,
    pub detail_course_no: String,
    pub detail_course_name: String,
    pub total_students: String,
}

impl ClashRecord {
    /// Constructor corto para tests y herramientas: sólo los dos cursos y el peso.
    pub fn pair(main: &str, detail: &str, total_students: &str) -> Self {
        ClashRecord {
            academic_year: String::new(),
            department_name: String::new(),
            main_course_no: main.to_string(),
            main_course_name: String::new(),
            detail_course_no: detail.to_string(),
            detail_course_name: String::new(),
            total_students: total_students.to_string(),
        }
    }

    /// Igual que `pair` pero con nombres de curso.
    pub fn named(main: (&str, &str), detail: (&str, &str), total_students: &str) -> Self {
        ClashRecord {
            main_course_name: main.1.to_string(),
            detail_course_name: detail.1.to_string(),
            ..ClashRecord::pair(main.0, detail.0, total_students)
        }
    }

    /// Clave canónica del par no ordenado {main, detail}.
    pub fn pair_key(&self) -> (&str, &str) {
        let a = self.main_course_no.as_str();
        let b = self.detail_course_no.as_str();
        if a <= b { (a, b) } else { (b, a) }
    }

    /// Los dos cursos del registro con sus nombres, en orden (main, detail).
    pub fn courses(&self) -> [CourseRecord; 2] {
        [
            CourseRecord {
                id: self.main_course_no.clone(),
                name: self.main_course_name.clone(),
            },
            CourseRecord {
                id: self.detail_course_no.clone(),
                name: self.detail_course_name.clone(),
            },
        ]
    }
}

/// Curso (identificador, nombre visible).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseRecord {
    pub id: String,
    pub name: String,
}

/// Fila del reporte final: un curso con el color (franja de examen) asignado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColoredCourse {
    pub vertex: usize,
    pub course_id: String,
    pub course_name: String,
    pub color: usize,
}
