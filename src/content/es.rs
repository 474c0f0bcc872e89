//! Spanish privacy policy strings.
//!
//! Only the opening sections are translated so far.

pub(super) const PRIVACY: &[(&str, &str)] = &[
    ("TITLE", "Política de Privacidad"),
    ("LAST_UPDATED", "Última actualización"),
    ("INTRO_TITLE", "Introducción"),
    ("INTRO_TEXT", "Music Rights Platform (\"nosotros\", \"nuestro\" o \"Compañía\") opera el sitio web y la aplicación Music Rights Platform. Esta Política de Privacidad explica cómo recopilamos, usamos y protegemos su información cuando usa nuestro Servicio."),
    ("PASSION_PROJECT", "Este es un Proyecto Personal – No un Servicio Comercial"),
    ("PASSION_1", "Esta plataforma es un proyecto personal no comercial creado por un individuo."),
    ("PASSION_2", "No es una empresa registrada, LLC o entidad legal."),
    ("PASSION_3", "No hay equipo de soporte dedicado, línea de atención al cliente o Acuerdo de Nivel de Servicio (SLA)."),
    ("PASSION_4", "Las funciones, el tiempo de actividad y la funcionalidad se proporcionan solo \"en la medida de lo posible\"."),
    ("PASSION_5", "No hacemos garantías sobre confiabilidad, disponibilidad, precisión o idoneidad para ningún propósito particular."),
    ("NO_LIABILITY", "Sin Responsabilidad por Daños o Pérdidas"),
    ("NO_LIABILITY_TEXT", "Al usar esta plataforma, reconoce y acepta que NO asumimos NINGUNA responsabilidad por pérdidas, daños, pérdida de datos u otras consecuencias que surjan de su uso de este Servicio. Uso completamente bajo su propio riesgo."),
    ("ACKNOWLEDGMENT", "Reconocimiento de Términos"),
    ("GDPR_COMPLIANCE", "Aunque este es un proyecto personal, cumplimos con el <strong>Reglamento General de Protección de Datos (GDPR)</strong> y las leyes europeas de protección de datos aplicables."),
];
