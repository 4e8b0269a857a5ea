/// Fixture: excerpts of the OpenGL core profile header

pub const CORE_EXCERPT: &str = r#"#ifndef __glcorearb_h_
#define __glcorearb_h_ 1

#ifdef __cplusplus
extern "C" {
#endif

#ifndef GL_VERSION_1_0
#define GL_VERSION_1_0 1
typedef void GLvoid;
typedef unsigned int GLenum;
typedef void (APIENTRYP PFNGLCULLFACEPROC) (GLenum mode);
typedef void (APIENTRYP PFNGLCLEARPROC) (GLbitfield mask);
#ifdef GL_GLEXT_PROTOTYPES
GLAPI void APIENTRY glCullFace (GLenum mode);
GLAPI void APIENTRY glClear (GLbitfield mask);
GLAPI void APIENTRY glClearColor (GLfloat red, GLfloat green, GLfloat blue, GLfloat alpha);
GLAPI GLenum APIENTRY glGetError (void);
GLAPI const GLubyte *APIENTRY glGetString (GLenum name);
#endif
#endif /* GL_VERSION_1_0 */
#define GL_DEPTH_BUFFER_BIT               0x00000100
#define GL_STENCIL_BUFFER_BIT             0x00000400
#define GL_COLOR_BUFFER_BIT               0x00004000
#define GL_FALSE                          0
#define GL_TRUE                           1

#ifdef __cplusplus
}
#endif

#endif
"#;

/// Same declarations as [`CORE_EXCERPT`] in a different line order
pub const CORE_EXCERPT_SHUFFLED: &str = r#"#define GL_TRUE                           1
GLAPI GLenum APIENTRY glGetError (void);
#define GL_COLOR_BUFFER_BIT               0x00004000
GLAPI void APIENTRY glClearColor (GLfloat red, GLfloat green, GLfloat blue, GLfloat alpha);
#define GL_FALSE                          0
GLAPI void APIENTRY glClear (GLbitfield mask);
#define GL_DEPTH_BUFFER_BIT               0x00000100
#define GL_VERSION_1_0 1
GLAPI void APIENTRY glCullFace (GLenum mode);
#define GL_STENCIL_BUFFER_BIT             0x00000400
"#;

pub const MULTI_LINE_PROTOTYPE: &str = r#"GLAPI void APIENTRY glClear (GLbitfield mask);
GLAPI void APIENTRY glTexImage2D (GLenum target, GLint level,
    GLint internalformat, GLsizei width, GLsizei height);
"#;
